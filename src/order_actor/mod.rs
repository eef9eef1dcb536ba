//! Order-specific resource logic: the delivery status state machine.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
///
/// The actor still has to be started with `run(policy)`.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
