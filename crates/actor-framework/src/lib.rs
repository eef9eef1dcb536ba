//! # Actor Framework
//!
//! Building blocks for resource-oriented actors on top of Tokio.
//!
//! Every resource type gets its own [`ResourceActor`] task that owns the
//! resource store and processes requests sequentially. Callers talk to it
//! through a cloneable [`ResourceClient`]. Business logic lives in the
//! entity's [`ActorEntity`] implementation, so the message loop is written
//! once and reused for every resource.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): domain model, creation payload, actions.
//! 2. **Runtime** ([`ResourceActor`]): message loop and store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed requests.
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts, through
//! [`ResourceActor::run`], rather than at construction time. A delivery order
//! actor, for instance, receives its dispatch policy (maximum delivery
//! distance) as its context, and every action hook can read it.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32, punched: bool }
//! #[derive(Debug)] struct TicketCreate;
//! #[derive(Debug)] enum TicketAction { Punch }
//! #[derive(Debug, thiserror::Error)]
//! #[error("already punched")]
//! struct TicketError;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     type Create = TicketCreate;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u32, _: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, punched: false })
//!     }
//!
//!     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), Self::Error> {
//!         if self.punched {
//!             return Err(TicketError);
//!         }
//!         self.punched = true;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(TicketCreate).await.unwrap();
//!     client.perform_action(id, TicketAction::Punch).await.unwrap();
//!     assert!(client.perform_action(id, TicketAction::Punch).await.is_err());
//! }
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
