//! Custom actions for the Order actor.
//!
//! Each action moves a [`Order`](crate::model::Order) one step along its
//! delivery lifecycle and returns the resulting
//! [`OrderStatus`](crate::model::OrderStatus). They are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

/// Status transitions for Order entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Restaurant accepts a pending order.
    ///
    /// # Errors
    /// Fails outside business hours, when the customer is out of range, or
    /// when the order is no longer pending.
    Accept,
    /// Courier collects an accepted order.
    PickUp,
    /// Courier hands a picked-up order to the customer.
    Deliver,
}
