//! Canned lineups, innings and orders the demo binary runs through.

use crate::model::{BusinessHours, Location, OrderCreate};

pub const DODGERS: &str = "Dodgers";
pub const BLUE_JAYS: &str = "Blue Jays";

pub const DODGERS_LINEUP: &[&str] = &[
    "Shohei Ohtani",
    "Mookie Betts",
    "Freddie Freeman",
    "Will Smith",
    "Max Muncy",
    "Teoscar Hernandez",
    "Tommy Edman",
    "Andy Pages",
    "Miguel Rojas",
];

pub const BLUE_JAYS_LINEUP: &[&str] = &[
    "George Springer",
    "Bo Bichette",
    "Vladimir Guerrero Jr.",
    "Daulton Varsho",
    "Justin Turner",
    "Davis Schneider",
    "Alejandro Kirk",
    "Isiah Kiner-Falefa",
    "Ernie Clement",
];

/// A run scores, two are stranded.
pub const SCORING_INNING: &[&str] = &["BB", "1B", "K", "2B 1R", "F8", "6-3"];

/// Three up, three down, then a stray single after the third out.
pub const PLAY_AFTER_THIRD_OUT: &[&str] = &["K", "K", "K", "1B"];

/// The scorer's notes break off at an unreadable code.
pub const UNREADABLE_CODE: &[&str] = &["BB", "K", "3B 1R", "WTF", "HR 3R"];

/// Bases loaded walks and a bases-clearing double.
pub const WALK_PARADE: &[&str] = &["BB", "BB", "BB", "BB 1R", "2B 2R", "K", "BB", "K"];

pub const ALL_INNINGS: [&[&str]; 4] = [
    SCORING_INNING,
    PLAY_AFTER_THIRD_OUT,
    UNREADABLE_CODE,
    WALK_PARADE,
];

/// Visitors' innings, one entry per inning.
pub const TOP_HALVES: [Option<&[&str]>; 3] = [
    Some(SCORING_INNING),
    Some(PLAY_AFTER_THIRD_OUT),
    Some(WALK_PARADE),
];

/// Home team's innings, one entry per inning.
pub const BOTTOM_HALVES: [Option<&[&str]>; 3] = [
    Some(PLAY_AFTER_THIRD_OUT),
    Some(UNREADABLE_CODE),
    Some(SCORING_INNING),
];

/// A normal order, one too far away, and one placed after closing.
pub fn demo_orders() -> Vec<OrderCreate> {
    vec![
        OrderCreate {
            customer: "Andy".into(),
            restaurant: "McDonalds".into(),
            hours: BusinessHours::new(1000, 2100),
            ordered_at: 1300,
            restaurant_at: Location::new(2, 3),
            customer_at: Location::new(5, 6),
        },
        OrderCreate {
            customer: "Edward".into(),
            restaurant: "KFC".into(),
            hours: BusinessHours::new(1000, 2100),
            ordered_at: 1800,
            restaurant_at: Location::new(0, 0),
            customer_at: Location::new(15, 15),
        },
        OrderCreate {
            customer: "Walter".into(),
            restaurant: "Subway".into(),
            hours: BusinessHours::new(1000, 2100),
            ordered_at: 2200,
            restaurant_at: Location::new(1, 1),
            customer_at: Location::new(8, 5),
        },
    ]
}
