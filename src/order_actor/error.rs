//! Error types for the Order actor.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// The first three variants are business-rule violations: the order stays in
/// the state it was in before the rejected request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order was placed while the restaurant was closed.
    #[error("{restaurant} is closed (hours {open:04}-{close:04}, ordered at {ordered_at:04})")]
    OutsideBusinessHours {
        restaurant: String,
        open: u16,
        close: u16,
        ordered_at: u16,
    },

    /// The customer is too far from the restaurant.
    #[error("{restaurant} is {distance:.1} km from {customer}, beyond the delivery range")]
    OutOfRange {
        restaurant: String,
        customer: String,
        distance: f64,
    },

    /// The requested step does not follow from the current status.
    #[error("Cannot {step} order: status is {actual}, expected {expected}")]
    InvalidTransition {
        step: &'static str,
        expected: OrderStatus,
        actual: OrderStatus,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
