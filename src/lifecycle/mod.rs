//! Runtime orchestration and lifecycle management.
//!
//! - [`DeliverySystem`] starts the order actor with its policy and shuts it
//!   down again.
//! - [`setup_tracing`] initializes the logging infrastructure.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::*;
pub use tracing::*;
