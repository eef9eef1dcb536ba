use actor_framework::ActorClient;
use play_by_play::config::DeliveryPolicy;
use play_by_play::fixtures;
use play_by_play::lifecycle::DeliverySystem;
use play_by_play::clients::OrderClient;
use play_by_play::model::{OrderCreate, OrderStatus};
use play_by_play::order_actor::OrderError;

/// Full end-to-end run of the three demo orders through a live system.
#[tokio::test]
async fn test_demo_orders_end_to_end() {
    let system = DeliverySystem::new(DeliveryPolicy::default());
    let client = &system.order_client;

    let mut ids = Vec::new();
    for params in fixtures::demo_orders() {
        ids.push(client.place_order(params).await.expect("Failed to place order"));
    }

    // 1. Normal order goes all the way
    assert_eq!(client.accept_order(ids[0]).await, Ok(OrderStatus::Accepted));
    assert_eq!(client.pickup_order(ids[0]).await, Ok(OrderStatus::PickedUp));
    assert_eq!(client.deliver_order(ids[0]).await, Ok(OrderStatus::Delivered));

    // 2. Too far: accept fails, so pickup fails too
    let err = client.accept_order(ids[1]).await.unwrap_err();
    assert!(matches!(err, OrderError::OutOfRange { .. }), "{err:?}");
    assert!(err.to_string().contains("21.2 km"));
    assert!(client.pickup_order(ids[1]).await.is_err());

    // 3. After closing time
    let err = client.accept_order(ids[2]).await.unwrap_err();
    assert!(
        matches!(err, OrderError::OutsideBusinessHours { ordered_at: 2200, .. }),
        "{err:?}"
    );

    let statuses: Vec<OrderStatus> = {
        let mut out = Vec::new();
        for id in &ids {
            let order = client.get(*id).await.unwrap().expect("Order not found");
            out.push(order.status);
        }
        out
    };
    assert_eq!(
        statuses,
        vec![OrderStatus::Delivered, OrderStatus::Pending, OrderStatus::Pending]
    );

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Concurrent callers share one actor; each order still moves independently.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = DeliverySystem::new(DeliveryPolicy::default());

    let mut handles = vec![];
    for _ in 0..10 {
        let order_client = system.order_client.clone();
        let params = fixtures::demo_orders().remove(0);

        handles.push(tokio::spawn(async move {
            run_to_delivery(&order_client, params).await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Ok(OrderStatus::Delivered));
    }

    system.shutdown().await.unwrap();
}

async fn run_to_delivery(
    client: &OrderClient,
    params: OrderCreate,
) -> Result<OrderStatus, OrderError> {
    let id = client.place_order(params).await?;
    client.accept_order(id).await?;
    client.pickup_order(id).await?;
    client.deliver_order(id).await
}
