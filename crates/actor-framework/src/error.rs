//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to the business
//! errors an entity returns from its hooks.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A hook rejected the request. The boxed error is the entity's own
    /// `ActorEntity::Error` and can be recovered with `downcast`.
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the entity's own error type from an `EntityError`.
    ///
    /// Hands back the `FrameworkError` unchanged when it is not an entity error or
    /// when the boxed error is of a different type.
    pub fn into_entity_error<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}
