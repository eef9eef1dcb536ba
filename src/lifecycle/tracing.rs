//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter that
//! writes to stderr, leaving stdout to the scorebook printouts.
//!
//! The level comes from `RUST_LOG`:
//!
//! ```bash
//! # Business-rule warnings, notation errors and status changes
//! RUST_LOG=info cargo run
//!
//! # Every play applied, full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the scorebook
//! RUST_LOG=play_by_play::scorebook=debug cargo run
//! ```
//!
//! Spans are opened per half-inning (`half_inning{team, inning, half}`) and per
//! order workflow, so with the compact format a notation error reads like:
//!
//! ```text
//! ERROR half_inning{team="Blue Jays" inning=2 half=bottom}: Half-inning ends early
//!     error=Unrecognized play 'WTF' (batter: Daulton Varsho)
//! ```
//!
//! Calling it twice panics, as does any other global subscriber already
//! being installed; call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false) // Module paths add nothing to these short messages
        .compact()
        .init();
}
