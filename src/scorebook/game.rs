//! Game orchestration: two teams, alternating halves, a linescore.

use super::inning::{simulate_half_inning, HalfInning};
use crate::config::SimulatorOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, info_span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Half {
    /// Visitors bat.
    Top,
    /// Home team bats.
    Bottom,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Half::Top => "top",
            Half::Bottom => "bottom",
        })
    }
}

/// A team's running state over a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub name: String,
    pub lineup: Vec<String>,
    /// Lineup slot due up next.
    pub batter_index: usize,
    /// Runs per inning, `inning_runs[0]` is the first inning. `None` means
    /// the team had no events recorded that inning.
    pub inning_runs: Vec<Option<u32>>,
    pub total_runs: u32,
}

impl TeamState {
    pub fn new<I, S>(name: impl Into<String>, lineup: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lineup: lineup.into_iter().map(Into::into).collect(),
            batter_index: 0,
            inning_runs: Vec::new(),
            total_runs: 0,
        }
    }

    /// Bats through `events` in `inning` (1-based) and returns the updated
    /// state together with the half-inning that produced it.
    pub fn take_turn<E: AsRef<str>>(
        mut self,
        inning: usize,
        events: &[E],
        options: SimulatorOptions,
    ) -> (Self, HalfInning) {
        let half = simulate_half_inning(self.lineup.as_slice(), self.batter_index, events, options);

        *self.slot(inning) = Some(half.summary.runs);
        self.total_runs += half.summary.runs;
        self.batter_index = half.next_batter;

        (self, half)
    }

    /// Records that nothing was scored for this team in `inning`.
    pub fn sit_out(mut self, inning: usize) -> Self {
        *self.slot(inning) = None;
        self
    }

    /// Runs scored in `inning` (1-based), if the team batted.
    pub fn runs_in(&self, inning: usize) -> Option<u32> {
        inning
            .checked_sub(1)
            .and_then(|i| self.inning_runs.get(i).copied().flatten())
    }

    fn slot(&mut self, inning: usize) -> &mut Option<u32> {
        let index = inning.saturating_sub(1);
        if self.inning_runs.len() <= index {
            self.inning_runs.resize(index + 1, None);
        }
        &mut self.inning_runs[index]
    }
}

/// What happened in one half of one inning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfReport {
    pub inning: usize,
    pub half: Half,
    pub team: String,
    /// `None` when no events were recorded for this half.
    pub result: Option<HalfInning>,
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub away: TeamState,
    pub home: TeamState,
    pub innings: usize,
    /// In playing order: top of the first, bottom of the first, ...
    pub halves: Vec<HalfReport>,
}

/// Plays a game.
///
/// `top[i]` holds the visitors' tokens for inning `i + 1`, `bottom[i]` the
/// home team's. The game lasts as many innings as the longer of the two;
/// a missing or `None` entry means no events for that half. Each team's
/// batting order carries over from one of its halves to the next.
pub fn play_game<E: AsRef<str>>(
    away: TeamState,
    home: TeamState,
    top: &[Option<&[E]>],
    bottom: &[Option<&[E]>],
    options: SimulatorOptions,
) -> Game {
    let innings = top.len().max(bottom.len());
    let mut away = away;
    let mut home = home;
    let mut halves = Vec::with_capacity(innings * 2);

    info!(away = %away.name, home = %home.name, innings, "Play ball");

    for inning in 1..=innings {
        let events = top.get(inning - 1).copied().flatten();
        let (next, report) = play_half(away, inning, Half::Top, events, options);
        away = next;
        halves.push(report);

        let events = bottom.get(inning - 1).copied().flatten();
        let (next, report) = play_half(home, inning, Half::Bottom, events, options);
        home = next;
        halves.push(report);
    }

    info!(
        away = %away.name,
        away_runs = away.total_runs,
        home = %home.name,
        home_runs = home.total_runs,
        "Game over"
    );

    Game {
        away,
        home,
        innings,
        halves,
    }
}

fn play_half<E: AsRef<str>>(
    team: TeamState,
    inning: usize,
    half: Half,
    events: Option<&[E]>,
    options: SimulatorOptions,
) -> (TeamState, HalfReport) {
    let span = info_span!("half_inning", team = %team.name, inning, %half);
    let _enter = span.enter();

    let name = team.name.clone();
    let (team, result) = match events {
        Some(events) => {
            info!(leadoff = team.batter_index + 1, "Batting");
            let (team, result) = team.take_turn(inning, events, options);
            (team, Some(result))
        }
        None => {
            info!("No events this half");
            (team.sit_out(inning), None)
        }
    };

    (
        team,
        HalfReport {
            inning,
            half,
            team: name,
            result,
        },
    )
}

impl Game {
    pub fn linescore(&self) -> Linescore<'_> {
        Linescore { game: self }
    }
}

/// Renders as a table:
///
/// ```text
/// Inning    | 1 2 3 | R
/// Dodgers   | 1 0 4 | 5
/// Blue Jays | 0 1 1 | 2
/// ```
///
/// An `x` marks a half with no events.
pub struct Linescore<'a> {
    game: &'a Game,
}

impl Linescore<'_> {
    fn cell(team: &TeamState, inning: usize) -> String {
        team.runs_in(inning)
            .map_or_else(|| "x".to_string(), |runs| runs.to_string())
    }
}

impl fmt::Display for Linescore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Game {
            away,
            home,
            innings,
            ..
        } = self.game;
        let teams = [away, home];

        let label_width = teams
            .iter()
            .map(|t| t.name.chars().count())
            .chain(["Inning".len()])
            .max()
            .unwrap_or_default();
        let widths: Vec<usize> = (1..=*innings)
            .map(|inning| {
                teams
                    .iter()
                    .map(|t| Self::cell(t, inning).len())
                    .chain([inning.to_string().len()])
                    .max()
                    .unwrap_or(1)
            })
            .collect();

        write!(f, "{:<label_width$} |", "Inning")?;
        for (inning, width) in (1..=*innings).zip(widths.iter().copied()) {
            write!(f, " {inning:>width$}")?;
        }
        write!(f, " | R")?;

        for team in teams {
            write!(f, "\n{:<label_width$} |", team.name)?;
            for (inning, width) in (1..=*innings).zip(widths.iter().copied()) {
                write!(f, " {:>width$}", Self::cell(team, inning))?;
            }
            write!(f, " | {}", team.total_runs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(name: &str) -> TeamState {
        TeamState::new(name, ["1", "2", "3", "4", "5", "6", "7", "8", "9"])
    }

    #[test]
    fn take_turn_returns_updated_state() {
        let before = team("Away");
        let (after, half) =
            before
                .clone()
                .take_turn(1, &["HR", "K", "K", "K"], SimulatorOptions::default());

        assert_eq!(half.summary.runs, 1);
        assert_eq!(after.total_runs, 1);
        assert_eq!(after.batter_index, 4);
        assert_eq!(after.inning_runs, vec![Some(1)]);
        // The state passed in is untouched.
        assert_eq!(before.total_runs, 0);
    }

    #[test]
    fn inning_slots_grow_for_extra_innings() {
        let (state, _) = team("Away").take_turn(12, &["K"], SimulatorOptions::default());
        assert_eq!(state.inning_runs.len(), 12);
        assert_eq!(state.runs_in(12), Some(0));
        assert_eq!(state.runs_in(11), None);
        assert_eq!(state.runs_in(0), None);
    }

    #[test]
    fn linescore_marks_halves_without_events() {
        let top: [Option<&[&str]>; 2] = [Some(&["HR", "K", "K", "K"]), Some(&["K", "K", "K"])];
        let bottom: [Option<&[&str]>; 1] = [Some(&["BB", "HR", "K", "K", "K"])];

        let game = play_game(
            team("Visitors"),
            team("Home"),
            &top,
            &bottom,
            SimulatorOptions::default(),
        );

        assert_eq!(game.innings, 2);
        assert_eq!(game.halves.len(), 4);
        assert!(game.halves[3].result.is_none());
        assert_eq!(
            game.linescore().to_string(),
            "Inning   | 1 2 | R\nVisitors | 1 0 | 1\nHome     | 2 x | 2"
        );
    }
}
