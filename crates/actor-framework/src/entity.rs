//! # ActorEntity Trait
//!
//! The contract a resource type implements to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the ID,
//! the creation payload, the custom actions, the injected context and the
//! error type, so a client can never send an action meant for another
//! resource.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] has a default implementation that does nothing.
//! Override it to validate a freshly built entity against its context.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so they may await other actors. The `Context` type is
/// injected into every hook when the actor starts (`run(context)`), not when
/// it is constructed, which keeps policy and dependencies out of the entity
/// itself.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum for the whole entity, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    ///
    /// Implementations must leave `self` untouched when they return `Err`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
