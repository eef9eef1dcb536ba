//! The half-inning simulator.

use super::bases::Bases;
use super::error::NotationError;
use super::notation::Play;
use crate::config::SimulatorOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info};

/// The side is retired after this many outs.
pub const OUTS_PER_HALF: u8 = 3;

/// Line for one half-inning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InningSummary {
    pub runs: u32,
    pub hits: u32,
    pub outs: u8,
    /// Runners left on base.
    pub lob: u32,
    /// e.g. `"third, second occupied"`
    pub base_state: String,
}

impl fmt::Display for InningSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "R={}", self.runs)?;
        writeln!(f, "H={}", self.hits)?;
        writeln!(f, "O={}", self.outs)?;
        write!(f, "LOB={} ({})", self.lob, self.base_state)
    }
}

/// Everything a half-inning produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfInning {
    pub summary: InningSummary,
    /// Lineup slot that leads off this team's next half-inning.
    pub next_batter: usize,
    /// The token that ended processing early, if any.
    pub halted_by: Option<NotationError>,
    /// Recoverable problems logged along the way.
    pub anomalies: Vec<NotationError>,
}

/// Running tally while tokens are applied.
#[derive(Debug, Default)]
struct Tally {
    bases: Bases,
    runs: u32,
    hits: u32,
    outs: u8,
    batter: usize,
}

impl Tally {
    /// Applies one play. Returns the anomaly if its run annotation was
    /// rejected; the play itself still counts.
    fn apply(&mut self, token: &str, play: Play) -> Option<NotationError> {
        let mut anomaly = None;

        match play.kind.advance() {
            Some(advance) => {
                if play.kind.is_hit() {
                    self.hits += 1;
                }

                // Checked against the bases before anyone moves.
                let runners_on_base = self.bases.runners();
                let credited = match play.explicit_runs {
                    Some(claimed) if claimed > runners_on_base + 1 => {
                        anomaly = Some(NotationError::ExcessRuns {
                            token: token.to_string(),
                            claimed,
                            runners_on_base,
                        });
                        Some(0)
                    }
                    explicit => explicit,
                };

                let auto_runs = self.bases.advance(advance);
                self.runs += credited.unwrap_or(auto_runs);
            }
            None => {
                self.outs = self.outs.saturating_add(play.kind.outs()).min(OUTS_PER_HALF);
            }
        }

        self.batter += 1;
        anomaly
    }
}

fn batter_name<S: AsRef<str>>(lineup: &[S], index: usize) -> &str {
    match lineup.len() {
        0 => "unknown",
        len => lineup[index % len].as_ref(),
    }
}

/// Plays `events` for the batting team whose lineup is `lineup`, starting
/// with the batter in slot `start`. Any `start` is accepted; it is reduced
/// modulo the lineup length first.
///
/// Processing stops at the third out, ignoring whatever follows, or at the
/// first token that cannot be classified. The summary only covers the
/// tokens applied before that point.
pub fn simulate_half_inning<S, E>(
    lineup: &[S],
    start: usize,
    events: &[E],
    options: SimulatorOptions,
) -> HalfInning
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let mut tally = Tally {
        batter: start % lineup.len().max(1),
        ..Tally::default()
    };
    let mut halted_by = None;
    let mut anomalies = Vec::new();

    for token in events {
        let token = token.as_ref();

        if tally.outs >= OUTS_PER_HALF {
            if options.report_after_third_out {
                let anomaly = NotationError::AfterThirdOut {
                    token: token.to_string(),
                };
                error!(%anomaly, "Ignoring play");
                anomalies.push(anomaly);
            }
            break;
        }

        let batter = batter_name(lineup, tally.batter);
        let play = match Play::parse(token) {
            Ok(play) => play,
            Err(e) => {
                let e = e.at_bat(batter);
                error!(error = %e, "Half-inning ends early");
                halted_by = Some(e);
                break;
            }
        };

        debug!(batter, token, ?play, "Play");
        if let Some(anomaly) = tally.apply(token, play) {
            error!(%anomaly, batter, "Run annotation rejected, no runs credited");
            anomalies.push(anomaly);
        }
    }

    let summary = InningSummary {
        runs: tally.runs,
        hits: tally.hits,
        outs: tally.outs,
        lob: tally.bases.runners(),
        base_state: tally.bases.describe(),
    };
    info!(
        runs = summary.runs,
        hits = summary.hits,
        outs = summary.outs,
        lob = summary.lob,
        "Half-inning over"
    );

    HalfInning {
        summary,
        next_batter: match lineup.len() {
            0 => 0,
            len => tally.batter % len,
        },
        halted_by,
        anomalies,
    }
}

/// Summary of `events` played by the Dodgers from the top of the order.
pub fn inning_summary<E: AsRef<str>>(events: &[E]) -> InningSummary {
    simulate_half_inning(
        crate::fixtures::DODGERS_LINEUP,
        0,
        events,
        SimulatorOptions::default(),
    )
    .summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const NINE: [&str; 9] = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];

    #[test]
    fn next_batter_wraps_around_the_order() {
        let events = ["1B", "BB", "K", "K", "K"];
        let half = simulate_half_inning(&NINE, 7, &events, SimulatorOptions::default());
        assert_eq!(half.next_batter, 3);
    }

    #[test]
    fn any_start_index_is_taken_modulo_the_lineup() {
        let half = simulate_half_inning(&NINE, usize::MAX, &["K"], SimulatorOptions::default());
        assert_eq!(half.next_batter, (usize::MAX % 9 + 1) % 9);
        assert_eq!(half.summary.outs, 1);

        let half = simulate_half_inning(&NINE, 9 * 4 + 2, &["??"], SimulatorOptions::default());
        assert_eq!(half.next_batter, 2);
        assert_eq!(
            half.halted_by,
            Some(NotationError::Unrecognized {
                token: "??".into(),
                batter: "c".into(),
            })
        );
    }

    #[test]
    fn halting_token_does_not_use_a_batter() {
        let half = simulate_half_inning(&NINE, 0, &["K", "??", "K"], SimulatorOptions::default());
        assert_eq!(half.next_batter, 1);
        assert_eq!(half.summary.outs, 1);
        assert_eq!(
            half.halted_by,
            Some(NotationError::Unrecognized {
                token: "??".into(),
                batter: "b".into(),
            })
        );
        assert_eq!(
            half.halted_by.map(|e| e.to_string()).as_deref(),
            Some("Unrecognized play '??' (batter: b)")
        );
    }

    #[test]
    fn excess_run_annotation_credits_nothing_but_still_moves_runners() {
        // One on, so a double can bring home at most two.
        let events = ["BB", "2B 3R", "K"];
        let half = simulate_half_inning(&NINE, 0, &events, SimulatorOptions::default());
        assert_eq!(half.summary.runs, 0);
        assert_eq!(half.summary.hits, 1);
        assert_eq!(half.summary.outs, 1);
        assert_eq!(half.summary.base_state, "third, second occupied");
        assert_eq!(half.next_batter, 3);
        assert_eq!(
            half.anomalies,
            vec![NotationError::ExcessRuns {
                token: "2B 3R".into(),
                claimed: 3,
                runners_on_base: 1,
            }]
        );
        assert_eq!(half.halted_by, None);
    }

    #[test]
    fn explicit_runs_override_the_automatic_count() {
        // The annotation wins even though the runner from first stops at third.
        let half = simulate_half_inning(&NINE, 0, &["1B", "2B 1R"], SimulatorOptions::default());
        assert_eq!(half.summary.runs, 1);
        assert_eq!(half.summary.lob, 2);
    }

    #[test]
    fn double_play_and_cap_at_three_outs() {
        let options = SimulatorOptions::default();
        let half = simulate_half_inning(&NINE, 0, &["1B", "K", "6-4-3"], options);
        assert_eq!(half.summary.outs, 3);

        let half = simulate_half_inning(&NINE, 0, &["K", "K", "6-4-3"], options);
        assert_eq!(half.summary.outs, 3);
    }

    #[test]
    fn trailing_play_reported_only_when_asked() {
        let events = ["K", "K", "K", "HR"];

        let loud = simulate_half_inning(&NINE, 0, &events, SimulatorOptions::default());
        assert_eq!(
            loud.anomalies,
            vec![NotationError::AfterThirdOut { token: "HR".into() }]
        );

        let quiet = simulate_half_inning(
            &NINE,
            0,
            &events,
            SimulatorOptions {
                report_after_third_out: false,
            },
        );
        assert!(quiet.anomalies.is_empty());
        assert_eq!(quiet.summary, loud.summary);
        assert_eq!(quiet.next_batter, 3);
    }

    #[test]
    fn empty_lineup_does_not_panic() {
        let lineup: [&str; 0] = [];
        let half = simulate_half_inning(&lineup, 5, &["1B"], SimulatorOptions::default());
        assert_eq!(half.next_batter, 0);
        assert_eq!(half.summary.hits, 1);
    }

    #[test]
    fn summary_prints_four_lines() {
        let summary = inning_summary(&["BB", "1B", "K", "2B 1R", "F8", "6-3"]);
        assert_eq!(
            summary.to_string(),
            "R=1\nH=2\nO=3\nLOB=2 (third, second occupied)"
        );
    }
}
