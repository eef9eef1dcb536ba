//! # Generic Messages
//!
//! Request types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Every resource supports the same small lifecycle:
///
/// - **Create**: builds a new resource from [`ActorEntity::Create`].
/// - **Get**: fetches a snapshot of the resource by ID.
/// - **Action**: runs a resource-specific [`ActorEntity::Action`] (for a
///   delivery order: accept, pick up, deliver).
///
/// The enum is generic over `T: ActorEntity`, so an order actor can only ever
/// receive order payloads.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
