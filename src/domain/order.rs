use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Every simulated order ships to the same address.
pub const SHIPPING_ADDRESS: &str = "123 Main Street";

/// Quantity bounds for a single order line.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=5;

/// Body of `POST /app/api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: u32,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
}

/// One product line of an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: u32,
    pub quantity: u32,
}

/// The part of a create-order response the session keeps.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OrderCreated {
    pub id: u64,
}

impl OrderRequest {
    /// Builds a single-line order for `product_id` with a random quantity.
    pub fn single_line<R: Rng + ?Sized>(customer_id: u32, product_id: u32, rng: &mut R) -> Self {
        Self {
            customer_id,
            items: vec![OrderItem {
                product_id,
                quantity: rng.random_range(QUANTITY_RANGE),
            }],
            shipping_address: SHIPPING_ADDRESS.to_string(),
        }
    }
}
