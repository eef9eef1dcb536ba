//! ActorEntity trait implementation for the Order domain type.
//!
//! The status checks live in plain methods on [`Order`] so they can be tested
//! without spawning an actor; the trait implementation only dispatches.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::config::DeliveryPolicy;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderStatus;
    type Context = DeliveryPolicy;
    type Error = OrderError;

    /// Creates a new pending Order from creation parameters.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params))
    }

    /// Applies one status transition.
    ///
    /// # Actions
    /// - `Accept`: checks hours and distance against `policy`
    /// - `PickUp`: requires `Accepted`
    /// - `Deliver`: requires `PickedUp`
    async fn handle_action(
        &mut self,
        action: OrderAction,
        policy: &DeliveryPolicy,
    ) -> Result<OrderStatus, Self::Error> {
        match action {
            OrderAction::Accept => self.accept(policy),
            OrderAction::PickUp => {
                self.advance("pick up", OrderStatus::Accepted, OrderStatus::PickedUp)
            }
            OrderAction::Deliver => {
                self.advance("deliver", OrderStatus::PickedUp, OrderStatus::Delivered)
            }
        }
    }
}

impl Order {
    /// Restaurant accepts the order.
    ///
    /// Checks run in a fixed order: business hours, delivery distance, then
    /// the current status.
    pub fn accept(&mut self, policy: &DeliveryPolicy) -> Result<OrderStatus, OrderError> {
        info!(order_id = %self.id, restaurant = %self.restaurant, "Accepting order");

        if !self.hours.contains(self.ordered_at) {
            return Err(OrderError::OutsideBusinessHours {
                restaurant: self.restaurant.clone(),
                open: self.hours.open,
                close: self.hours.close,
                ordered_at: self.ordered_at,
            });
        }
        info!(restaurant = %self.restaurant, "Restaurant open");

        let distance = self.delivery_distance();
        if distance > policy.max_distance {
            return Err(OrderError::OutOfRange {
                restaurant: self.restaurant.clone(),
                customer: self.customer.clone(),
                distance,
            });
        }
        info!(
            restaurant = %self.restaurant,
            customer = %self.customer,
            distance = %format!("{distance:.1}"),
            "Within delivery range"
        );

        self.advance("accept", OrderStatus::Pending, OrderStatus::Accepted)
    }

    fn advance(
        &mut self,
        step: &'static str,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        if self.status != expected {
            return Err(OrderError::InvalidTransition {
                step,
                expected,
                actual: self.status,
            });
        }
        self.status = next;
        info!(order_id = %self.id, status = %self.status, "Status changed");
        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BusinessHours, Location};

    fn order(ordered_at: u16, customer_at: Location) -> Order {
        Order::new(
            OrderId(1),
            OrderCreate {
                customer: "Andy".into(),
                restaurant: "McDonalds".into(),
                hours: BusinessHours::new(1000, 2100),
                ordered_at,
                restaurant_at: Location::new(2, 3),
                customer_at,
            },
        )
    }

    #[test]
    fn accept_then_pick_up_then_deliver() {
        let mut o = order(1300, Location::new(5, 6));
        let policy = DeliveryPolicy::default();

        assert_eq!(o.accept(&policy), Ok(OrderStatus::Accepted));
        assert_eq!(
            o.advance("pick up", OrderStatus::Accepted, OrderStatus::PickedUp),
            Ok(OrderStatus::PickedUp)
        );
        assert_eq!(
            o.advance("deliver", OrderStatus::PickedUp, OrderStatus::Delivered),
            Ok(OrderStatus::Delivered)
        );
    }

    #[test]
    fn closing_time_is_exclusive() {
        let policy = DeliveryPolicy::default();

        let mut at_open = order(1000, Location::new(5, 6));
        assert!(at_open.accept(&policy).is_ok());

        let mut at_close = order(2100, Location::new(5, 6));
        let err = at_close.accept(&policy).unwrap_err();
        assert!(matches!(err, OrderError::OutsideBusinessHours { ordered_at: 2100, .. }));
        assert_eq!(at_close.status, OrderStatus::Pending);
    }

    #[test]
    fn hours_are_checked_before_distance() {
        let mut o = order(2200, Location::new(40, 40));
        let err = o.accept(&DeliveryPolicy::default()).unwrap_err();
        assert!(matches!(err, OrderError::OutsideBusinessHours { .. }));
    }

    #[test]
    fn exactly_max_distance_is_in_range() {
        // (2,3) -> (8,11) is a 6-8-10 triangle
        let mut o = order(1300, Location::new(8, 11));
        assert_eq!(o.accept(&DeliveryPolicy::default()), Ok(OrderStatus::Accepted));
    }

    #[test]
    fn out_of_range_reports_rounded_distance() {
        let mut o = order(1300, Location::new(17, 18));
        let err = o.accept(&DeliveryPolicy::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "McDonalds is 21.2 km from Andy, beyond the delivery range"
        );
        assert_eq!(o.status, OrderStatus::Pending);
    }

    #[test]
    fn policy_widens_the_range() {
        let mut o = order(1300, Location::new(17, 18));
        let policy = DeliveryPolicy { max_distance: 25.0 };
        assert_eq!(o.accept(&policy), Ok(OrderStatus::Accepted));
    }

    #[test]
    fn accept_twice_is_rejected() {
        let mut o = order(1300, Location::new(5, 6));
        let policy = DeliveryPolicy::default();
        o.accept(&policy).unwrap();

        assert_eq!(
            o.accept(&policy),
            Err(OrderError::InvalidTransition {
                step: "accept",
                expected: OrderStatus::Pending,
                actual: OrderStatus::Accepted,
            })
        );
    }
}
