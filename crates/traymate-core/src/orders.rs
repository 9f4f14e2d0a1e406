// ABOUTME: In-memory meal cart and order book with status lifecycle
// ABOUTME: Placing an order snapshots the cart, totals its nutrition, and empties it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TrayMate Contributors

//! # Cart & Orders
//!
//! A [`Cart`] collects meals for the resident currently being served. Placing it
//! through an [`OrderBook`] produces an [`Order`] in the `Confirmed` state with a
//! nutrition total, then clears the cart. Nothing here is persisted.

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{Meal, MealPeriod, NutritionTotals};

/// A meal in the cart with its serving count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog meal
    pub meal: Arc<Meal>,
    /// Number of servings, at least one
    pub quantity: u32,
    /// Free-text note for the kitchen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Ordered list of meals awaiting order placement
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a meal; a zero quantity is stored as one serving
    pub fn add(&mut self, meal: Arc<Meal>, quantity: u32, special_instructions: Option<String>) {
        debug!(meal_id = meal.id, quantity, "Adding meal to cart");
        self.items.push(CartItem {
            meal,
            quantity: quantity.max(1),
            special_instructions,
        });
    }

    /// Remove the item at `index`, returning it if present
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Empty the cart
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total servings across all items, saturating at `u32::MAX`
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Summed calories, sodium and protein
    #[must_use]
    pub fn total_nutrition(&self) -> NutritionTotals {
        let mut totals = NutritionTotals::default();
        for item in &self.items {
            totals.add_servings(&item.meal.nutrition, item.quantity);
        }
        totals
    }
}

/// Kitchen lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created but not yet accepted
    Pending,
    /// Accepted by the kitchen
    Confirmed,
    /// Being cooked
    Preparing,
    /// Ready for delivery
    Ready,
    /// Delivered to the resident
    Delivered,
    /// Cancelled before delivery
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order id
    pub id: Uuid,
    /// Resident the order is for
    pub resident_id: String,
    /// Snapshot of the cart at placement
    pub items: Vec<CartItem>,
    /// Service period, if the caller specified one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_period: Option<MealPeriod>,
    /// Current status
    pub status: OrderStatus,
    /// Nutrition totals across the items
    pub total_nutrition: NutritionTotals,
    /// Placement time
    pub placed_at: DateTime<Utc>,
}

/// All orders placed during the process lifetime, newest first
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Create an empty order book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn the cart into a confirmed order and clear it
    ///
    /// Returns `None` when the cart is empty.
    pub fn place(
        &mut self,
        resident_id: &str,
        meal_period: Option<MealPeriod>,
        cart: &mut Cart,
    ) -> Option<&Order> {
        if cart.is_empty() {
            return None;
        }

        let order = Order {
            id: Uuid::new_v4(),
            resident_id: resident_id.to_owned(),
            total_nutrition: cart.total_nutrition(),
            items: std::mem::take(&mut cart.items),
            meal_period,
            status: OrderStatus::Confirmed,
            placed_at: Utc::now(),
        };
        info!(
            order_id = %order.id,
            resident_id = %resident_id,
            items = order.items.len(),
            "Order placed"
        );
        self.orders.insert(0, order);
        self.orders.first()
    }

    /// Every order, newest first
    #[must_use]
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Orders for one resident, newest first
    pub fn orders_for<'a>(&'a self, resident_id: &'a str) -> impl Iterator<Item = &'a Order> {
        self.orders
            .iter()
            .filter(move |order| order.resident_id == resident_id)
    }

    /// Look up an order by id
    #[must_use]
    pub fn get(&self, order_id: Uuid) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    /// Move an order to a new status
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no order has this id.
    pub fn update_status(&mut self, order_id: Uuid, status: OrderStatus) -> AppResult<&Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {order_id}")))?;
        debug!(order_id = %order_id, from = %order.status, to = %status, "Order status change");
        order.status = status;
        Ok(order)
    }

    /// Cancel an order that is still open
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id and `ResourceLocked` when the
    /// order was already delivered or cancelled.
    pub fn cancel(&mut self, order_id: Uuid) -> AppResult<()> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| order.id == order_id)
            .ok_or_else(|| AppError::not_found(format!("Order {order_id}")))?;
        if matches!(order.status, OrderStatus::Delivered | OrderStatus::Cancelled) {
            return Err(AppError::new(
                ErrorCode::ResourceLocked,
                format!("Order {order_id} is already {}", order.status),
            ));
        }
        order.status = OrderStatus::Cancelled;
        Ok(())
    }
}
