//! Shorthand play codes.
//!
//! A token is a play code optionally followed by an explicit run count, e.g.
//! `"2B 1R"`: a double on which one run scored. Codes are matched on the
//! token's leading characters, first match wins:
//!
//! | Code | Play |
//! |---|---|
//! | `BB` | walk |
//! | `E` | reached on error |
//! | `1B` `2B` `3B` | single, double, triple |
//! | `HR` | home run |
//! | `K` | strikeout |
//! | `F<digit>` | fly-out to that fielder |
//! | `<digit>…-…` | ground-out, e.g. `6-3`, `6-4-3` |

use super::error::ParsePlayError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static RUNS_ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)R").expect("valid regex"));
static FLY_OUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^F\d").expect("valid regex"));
static GROUND_OUT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d.*-").expect("valid regex"));
static DIGIT_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Base number a runner reaches when they score.
pub const HOME: u8 = 4;

/// Returns the run count of the first `<digits>R` in `token`, or 0.
///
/// A count too large for `u32` saturates, so it still fails the run-bound
/// check instead of silently reading as zero.
pub fn extract_runs(token: &str) -> u32 {
    RUNS_ANNOTATION
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.as_str().parse().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

/// How a play moves people around the bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// Bases every runner already on base moves up.
    pub runners: u8,
    /// Base the batter ends up on; [`HOME`] means the batter scores.
    pub batter_to: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Walk,
    /// Batter reached on a fielding error.
    Error,
    Single,
    Double,
    Triple,
    HomeRun,
    Strikeout,
    FlyOut,
    /// `outs` is the number of outs the fielding sequence records.
    GroundOut { outs: u8 },
}

impl PlayKind {
    /// `None` for outs, which leave the runners where they are.
    pub fn advance(self) -> Option<Advance> {
        let (runners, batter_to) = match self {
            PlayKind::Walk | PlayKind::Error => (1, 1),
            PlayKind::Single => (1, 1),
            PlayKind::Double => (2, 2),
            PlayKind::Triple => (3, 3),
            PlayKind::HomeRun => (HOME, HOME),
            PlayKind::Strikeout | PlayKind::FlyOut | PlayKind::GroundOut { .. } => return None,
        };
        Some(Advance { runners, batter_to })
    }

    pub fn is_hit(self) -> bool {
        matches!(
            self,
            PlayKind::Single | PlayKind::Double | PlayKind::Triple | PlayKind::HomeRun
        )
    }

    pub fn outs(self) -> u8 {
        match self {
            PlayKind::Strikeout | PlayKind::FlyOut => 1,
            PlayKind::GroundOut { outs } => outs,
            _ => 0,
        }
    }
}

/// A parsed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Play {
    pub kind: PlayKind,
    /// Runs from an `<n>R` annotation; `None` when absent or zero.
    pub explicit_runs: Option<u32>,
}

impl Play {
    pub fn parse(token: &str) -> Result<Self, ParsePlayError> {
        let kind = classify(token).ok_or_else(|| ParsePlayError {
            token: token.to_string(),
        })?;
        let explicit_runs = Some(extract_runs(token)).filter(|&runs| runs > 0);
        Ok(Self {
            kind,
            explicit_runs,
        })
    }
}

impl FromStr for Play {
    type Err = ParsePlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn classify(token: &str) -> Option<PlayKind> {
    let kind = if token.starts_with("BB") {
        PlayKind::Walk
    } else if token.starts_with('E') {
        PlayKind::Error
    } else if token.starts_with("1B") {
        PlayKind::Single
    } else if token.starts_with("2B") {
        PlayKind::Double
    } else if token.starts_with("3B") {
        PlayKind::Triple
    } else if token.starts_with("HR") {
        PlayKind::HomeRun
    } else if token.starts_with('K') {
        PlayKind::Strikeout
    } else if FLY_OUT.is_match(token) {
        PlayKind::FlyOut
    } else if GROUND_OUT.is_match(token) {
        PlayKind::GroundOut {
            outs: ground_out_outs(token),
        }
    } else {
        return None;
    };
    Some(kind)
}

/// `6-3` is one out, `6-4-3` two: every throw after the first fielder
/// records an out. The run annotation is not part of the sequence.
fn ground_out_outs(token: &str) -> u8 {
    let sequence = token.split_whitespace().next().unwrap_or_default();
    let fielders = DIGIT_GROUP.find_iter(sequence).count();
    u8::try_from(fielders.saturating_sub(1)).unwrap_or(u8::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(token: &str) -> PlayKind {
        Play::parse(token).unwrap().kind
    }

    #[test]
    fn extracts_explicit_runs() {
        assert_eq!(extract_runs("2B 1R"), 1);
        assert_eq!(extract_runs("BB 3R"), 3);
        assert_eq!(extract_runs("K"), 0);
        assert_eq!(extract_runs("HR 12R"), 12);
        assert_eq!(extract_runs("HR 99999999999R"), u32::MAX);
    }

    #[test]
    fn classifies_by_prefix() {
        assert_eq!(kind("BB"), PlayKind::Walk);
        assert_eq!(kind("E6"), PlayKind::Error);
        assert_eq!(kind("1B"), PlayKind::Single);
        assert_eq!(kind("2B 1R"), PlayKind::Double);
        assert_eq!(kind("3B"), PlayKind::Triple);
        assert_eq!(kind("HR 3R"), PlayKind::HomeRun);
        assert_eq!(kind("K"), PlayKind::Strikeout);
        assert_eq!(kind("F8"), PlayKind::FlyOut);
        assert_eq!(kind("6-3"), PlayKind::GroundOut { outs: 1 });
    }

    #[test]
    fn ground_out_counts_throws() {
        assert_eq!(kind("6-4-3"), PlayKind::GroundOut { outs: 2 });
        assert_eq!(kind("5-4-3-2"), PlayKind::GroundOut { outs: 3 });
        assert_eq!(kind("3-"), PlayKind::GroundOut { outs: 1 });
        assert_eq!(kind("6-3 1R"), PlayKind::GroundOut { outs: 1 });
    }

    #[test]
    fn rejects_unknown_codes() {
        for token in ["WTF", "", "F", "FX", "63", "bb", " K"] {
            assert_eq!(
                Play::parse(token),
                Err(ParsePlayError {
                    token: token.to_string()
                }),
                "{token:?} should not parse"
            );
        }
    }

    #[test]
    fn zero_run_annotation_is_absent() {
        assert_eq!(Play::parse("1B 0R").unwrap().explicit_runs, None);
        assert_eq!(Play::parse("1B 2R").unwrap().explicit_runs, Some(2));
        assert_eq!("BB".parse::<Play>().unwrap().explicit_runs, None);
    }

    #[test]
    fn only_hits_count_as_hits() {
        assert!(PlayKind::Double.is_hit());
        assert!(!PlayKind::Walk.is_hit());
        assert!(!PlayKind::Error.is_hit());
        assert_eq!(PlayKind::Walk.outs(), 0);
        assert_eq!(PlayKind::Strikeout.outs(), 1);
    }
}
