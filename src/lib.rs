//! # Play-by-Play
//!
//! > **Two classroom systems, one crate.**
//!
//! 1. A **baseball scorebook** that reads shorthand play codes (`"2B 1R"`,
//!    `"6-3"`, `"K"`) into per-half-inning lines and a game linescore.
//! 2. A **delivery order tracker** that walks an order from pending to
//!    delivered, enforcing restaurant hours and delivery range on the way.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Scorebook ([`scorebook`])
//! Plain synchronous code with no shared state.
//! - **Key items**: [`simulate_half_inning`](scorebook::simulate_half_inning),
//!   [`TeamState::take_turn`](scorebook::TeamState::take_turn),
//!   [`play_game`](scorebook::play_game).
//! - Bad notation never aborts a game: an unreadable code ends that
//!   half-inning early and comes back as data in
//!   [`HalfInning`](scorebook::HalfInning).
//!
//! ### 2. The Order Tracker ([`order_actor`], [`clients`], [`lifecycle`])
//! Orders live in a [`ResourceActor`](actor_framework::ResourceActor) task.
//! - **Role**: [`Order`](model::Order) implements
//!   [`ActorEntity`](actor_framework::ActorEntity); its actions are the status
//!   transitions.
//! - **Context**: the [`DeliveryPolicy`](config::DeliveryPolicy) is injected
//!   when the actor starts, not baked into each order.
//! - **Key items**: [`OrderClient`](clients::OrderClient),
//!   [`DeliverySystem`](lifecycle::DeliverySystem).
//!
//! ### 3. Ambient
//! - [`config`]: policy and simulator options.
//! - [`lifecycle::setup_tracing`]: `tracing` subscriber, filtered by `RUST_LOG`.
//! - [`fixtures`]: the lineups, innings and orders the demo plays.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Scorebook and linescore on stdout, logs on stderr
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod fixtures;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod scorebook;
