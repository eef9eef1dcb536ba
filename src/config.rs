//! Runtime knobs for both subsystems.
//!
//! Log verbosity is not configured here; it comes from `RUST_LOG` (see
//! [`setup_tracing`](crate::lifecycle::setup_tracing)).

use serde::{Deserialize, Serialize};

/// Maximum restaurant-to-customer distance, in grid units.
pub const DEFAULT_MAX_DELIVERY_DISTANCE: f64 = 10.0;

/// Dispatch rules injected into the order actor as its context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryPolicy {
    pub max_distance: f64,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DELIVERY_DISTANCE,
        }
    }
}

/// Options for the half-inning simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorOptions {
    /// Log (and record) the first token that shows up after the third out.
    pub report_after_third_out: bool,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            report_after_third_out: true,
        }
    }
}
