//! Food-delivery orders.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! - Creation parameters: [`OrderCreate`]
//! - Status transitions: [`OrderAction`](crate::order_actor::OrderAction)

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in its delivery lifecycle.
///
/// Orders only move forward, one step at a time:
/// `Pending -> Accepted -> PickedUp -> Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Waiting for the restaurant.
    Pending,
    /// Restaurant took the order.
    Accepted,
    /// Courier collected the food.
    PickedUp,
    Delivered,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::PickedUp => "PICKED_UP",
            OrderStatus::Delivered => "DELIVERED",
        };
        f.write_str(name)
    }
}

/// Opening hours as four-digit 24h clock times, e.g. `1000`..`2100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub open: u16,
    pub close: u16,
}

impl BusinessHours {
    pub fn new(open: u16, close: u16) -> Self {
        Self { open, close }
    }

    /// Opening time is inclusive, closing time exclusive.
    pub fn contains(&self, time: u16) -> bool {
        self.open <= time && time < self.close
    }
}

/// A point on the delivery grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

/// A customer's order from one restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub restaurant: String,
    pub hours: BusinessHours,
    /// Four-digit clock time the order was placed.
    pub ordered_at: u16,
    pub restaurant_at: Location,
    pub customer_at: Location,
    pub status: OrderStatus,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: String,
    pub restaurant: String,
    pub hours: BusinessHours,
    pub ordered_at: u16,
    pub restaurant_at: Location,
    pub customer_at: Location,
}

impl Order {
    /// Creates a new order in the [`OrderStatus::Pending`] state.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `params` - Customer, restaurant, hours, time and locations
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            customer: params.customer,
            restaurant: params.restaurant,
            hours: params.hours,
            ordered_at: params.ordered_at,
            restaurant_at: params.restaurant_at,
            customer_at: params.customer_at,
            status: OrderStatus::Pending,
        }
    }

    /// Distance the courier has to cover.
    pub fn delivery_distance(&self) -> f64 {
        self.restaurant_at.distance_to(&self.customer_at)
    }
}
