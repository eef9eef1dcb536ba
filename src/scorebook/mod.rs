//! Baseball play-by-play interpreter.
//!
//! - [`notation`]: parses shorthand tokens such as `"2B 1R"` or `"6-4-3"`.
//! - [`bases`]: base occupancy and runner advancement.
//! - [`inning`]: plays one half-inning into an [`InningSummary`].
//! - [`game`]: alternates two [`TeamState`]s over a game and renders the
//!   linescore.
//!
//! Everything here is synchronous and free of shared state: the same tokens
//! always produce the same summary.

pub mod bases;
pub mod error;
pub mod game;
pub mod inning;
pub mod notation;

pub use bases::Bases;
pub use error::{NotationError, ParsePlayError};
pub use game::{play_game, Game, Half, HalfReport, Linescore, TeamState};
pub use inning::{
    inning_summary, simulate_half_inning, HalfInning, InningSummary, OUTS_PER_HALF,
};
pub use notation::{extract_runs, Play, PlayKind};
