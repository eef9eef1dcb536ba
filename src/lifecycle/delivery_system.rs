use crate::clients::OrderClient;
use crate::config::DeliveryPolicy;
use tracing::{error, info};

/// Owns the running order actor.
///
/// `DeliverySystem` is responsible for:
/// - **Lifecycle Management**: spawning the order actor and joining it on shutdown
/// - **Policy Injection**: handing the [`DeliveryPolicy`] to the actor as its context
///
/// # Example
///
/// ```ignore
/// let system = DeliverySystem::new(DeliveryPolicy::default());
///
/// let id = system.order_client.place_order(params).await?;
/// system.order_client.accept_order(id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handle of the order actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl DeliverySystem {
    /// Creates the order actor and spawns it in its own Tokio task.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(policy: DeliveryPolicy) -> Self {
        let (order_actor, order_client) = crate::order_actor::new();

        info!(max_distance = policy.max_distance, "Starting delivery system");
        let handle = tokio::spawn(order_actor.run(policy));

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel, the actor drains what is left
    /// and exits its loop. Returns `Err` if the actor task panicked.
    ///
    /// Clones of `order_client` handed out earlier keep the actor alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down delivery system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Delivery system shutdown complete.");
        Ok(())
    }
}
