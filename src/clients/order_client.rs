use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Business rules (hours, distance, status order) are enforced by the actor
/// in `Order::handle_action`; a rejected step comes back as the matching
/// [`OrderError`] and leaves the stored order unchanged.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(
        skip(self, params),
        fields(customer = %params.customer, restaurant = %params.restaurant)
    )]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        info!("Sending place_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Restaurant accepts a pending order.
    #[instrument(skip(self))]
    pub async fn accept_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.transition(id, OrderAction::Accept).await
    }

    /// Courier picks up an accepted order.
    #[instrument(skip(self))]
    pub async fn pickup_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.transition(id, OrderAction::PickUp).await
    }

    /// Courier delivers a picked-up order.
    #[instrument(skip(self))]
    pub async fn deliver_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.transition(id, OrderAction::Deliver).await
    }

    async fn transition(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<OrderStatus, OrderError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Business errors travel boxed inside `EntityError`; unbox them so
    /// callers can match on the variant.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}
