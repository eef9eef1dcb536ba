//! Base occupancy for one half-inning.

use super::notation::{Advance, HOME};
use std::fmt;

const NAMES: [&str; 3] = ["first", "second", "third"];

/// Which of first, second and third base hold a runner.
///
/// Slot 0 is first base. Runners are anonymous; a base is either occupied or
/// not, so two runners can never share one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bases([bool; 3]);

impl Bases {
    /// Bases empty.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_runners(first: bool, second: bool, third: bool) -> Self {
        Self([first, second, third])
    }

    /// `base` is 1-indexed; anything outside 1..=3 is never occupied.
    pub fn occupied(&self, base: u8) -> bool {
        match base {
            1..=3 => self.0[usize::from(base - 1)],
            _ => false,
        }
    }

    pub fn runners(&self) -> u32 {
        self.0.iter().filter(|&&occupied| occupied).count() as u32
    }

    /// Moves every runner up `advance.runners` bases and puts the batter on
    /// `advance.batter_to`, returning how many crossed the plate.
    ///
    /// Runners are moved from third down to first so none moves twice.
    pub fn advance(&mut self, advance: Advance) -> u32 {
        let mut next = [false; 3];
        let mut scored = 0;

        for base in (1..=3u8).rev() {
            if !self.occupied(base) {
                continue;
            }
            scored += Self::place(&mut next, base.saturating_add(advance.runners));
        }
        scored += Self::place(&mut next, advance.batter_to);

        self.0 = next;
        scored
    }

    fn place(next: &mut [bool; 3], base: u8) -> u32 {
        if base >= HOME {
            return 1;
        }
        if base >= 1 {
            next[usize::from(base - 1)] = true;
        }
        0
    }

    /// Occupied bases from third down to first, e.g. `"third, first occupied"`.
    pub fn describe(&self) -> String {
        let occupied: Vec<&str> = (0..3)
            .rev()
            .filter(|&i| self.0[i])
            .map(|i| NAMES[i])
            .collect();
        if occupied.is_empty() {
            "bases empty".to_string()
        } else {
            format!("{} occupied", occupied.join(", "))
        }
    }
}

impl fmt::Display for Bases {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
