//! Food ordering: intake, pricing from the live menu, and the kitchen
//! workflow.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use plage_core::{AppError, AppResult};
use plage_database::repositories::{
    FoodItemRepository, FoodOrderRepository, ReservationRepository,
};
use plage_entity::order::{
    FoodOrder, FoodOrderItem, FoodOrderWithOwner, NewFoodOrder, NewFoodOrderItem, OrderStatus,
    OrderType,
};
use plage_entity::reservation::ReservationStatus;

use crate::context::RequestContext;

/// A food order as submitted by a customer. Prices are deliberately
/// absent; they are resolved from the menu on the server.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub order_type: String,
    pub reservation_id: Option<Uuid>,
    pub delivery_address: Option<String>,
    pub items: Vec<OrderLine>,
}

/// One requested line: which dish, how many.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub food_item_id: Uuid,
    pub quantity: i32,
}

/// An order together with its lines, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: FoodOrder,
    pub items: Vec<FoodOrderItem>,
}

/// An order with owner contact details and lines, for the staff screen.
#[derive(Debug, Clone, Serialize)]
pub struct AdminOrder {
    #[serde(flatten)]
    pub order: FoodOrderWithOwner,
    pub items: Vec<FoodOrderItem>,
}

/// Service for placing food orders and moving them through the kitchen.
#[derive(Debug)]
pub struct OrderService {
    orders: Arc<FoodOrderRepository>,
    menu: Arc<FoodItemRepository>,
    reservations: Arc<ReservationRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<FoodOrderRepository>,
        menu: Arc<FoodItemRepository>,
        reservations: Arc<ReservationRepository>,
    ) -> Self {
        Self {
            orders,
            menu,
            reservations,
        }
    }

    /// Place an order for the calling customer.
    ///
    /// Online orders need a delivery address; dine-in orders need one of
    /// the caller's confirmed reservations. Every line is priced from
    /// the current menu, and the order plus its lines are stored in one
    /// transaction.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: OrderRequest,
    ) -> AppResult<OrderWithItems> {
        let order_type = OrderType::from_str(&request.order_type)?;
        if request.items.is_empty() {
            return Err(AppError::validation("Order must contain at least one item"));
        }
        if request.items.iter().any(|line| line.quantity < 1) {
            return Err(AppError::validation("Item quantities must be at least 1"));
        }

        let (reservation_id, delivery_address) = match order_type {
            OrderType::Enligne => {
                let address = request
                    .delivery_address
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .ok_or_else(|| {
                        AppError::validation("A delivery address is required for online orders")
                    })?;
                (None, Some(address.to_string()))
            }
            OrderType::SurPlace => {
                let id = request.reservation_id.ok_or_else(|| {
                    AppError::validation("A reservation is required for dine-in orders")
                })?;
                self.ensure_served_reservation(ctx, id).await?;
                (Some(id), None)
            }
        };

        let mut items = Vec::with_capacity(request.items.len());
        let mut total = Decimal::ZERO;
        for line in &request.items {
            let dish = self
                .menu
                .find_by_id(line.food_item_id)
                .await?
                .ok_or_else(|| {
                    AppError::validation(format!("Menu item {} does not exist", line.food_item_id))
                })?;
            if !dish.available {
                return Err(AppError::validation(format!(
                    "'{}' is currently unavailable",
                    dish.name
                )));
            }
            total += dish.price * Decimal::from(line.quantity);
            items.push(NewFoodOrderItem {
                food_item_id: dish.id,
                quantity: line.quantity,
                unit_price: dish.price,
            });
        }

        let order = self
            .orders
            .create(&NewFoodOrder {
                user_id: ctx.user_id,
                order_type,
                reservation_id,
                delivery_address,
                total_price: total,
                items,
            })
            .await?;

        info!(
            order_id = %order.id,
            user_id = %ctx.user_id,
            order_type = %order.order_type,
            total = %order.total_price,
            "Food order placed"
        );
        self.with_items(vec![order])
            .await?
            .pop()
            .ok_or_else(|| AppError::internal("Stored order vanished while loading its lines"))
    }

    /// The calling customer's orders with their lines, newest first.
    pub async fn list_own(&self, ctx: &RequestContext) -> AppResult<Vec<OrderWithItems>> {
        let orders = self.orders.find_by_user(ctx.user_id).await?;
        self.with_items(orders).await
    }

    /// Every order in the system with its owner's contact details.
    /// Staff only.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<AdminOrder>> {
        ctx.require_admin()?;
        let orders = self.orders.find_all_with_owner().await?;

        let ids: Vec<Uuid> = orders.iter().map(|o| o.order.id).collect();
        let mut lines: HashMap<Uuid, Vec<FoodOrderItem>> = HashMap::new();
        for line in self.orders.find_items_for(&ids).await? {
            lines.entry(line.order_id).or_default().push(line);
        }
        Ok(orders
            .into_iter()
            .map(|order| {
                let items = lines.remove(&order.order.id).unwrap_or_default();
                AdminOrder { order, items }
            })
            .collect())
    }

    /// Move an order forward in the kitchen workflow. Staff only.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        status: &str,
    ) -> AppResult<FoodOrder> {
        ctx.require_admin()?;
        let target = OrderStatus::from_str(status)?;
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
        if !order.status.can_transition_to(target) {
            return Err(AppError::invalid_transition(order.status, target));
        }

        let updated = self.orders.update_status(id, target).await?;
        info!(order_id = %id, from = %order.status, to = %target, "Order status changed");
        Ok(updated)
    }

    /// A dine-in order must point at one of the caller's own confirmed
    /// reservations.
    async fn ensure_served_reservation(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let reservation = self.reservations.find_by_id(id).await?;
        let valid = reservation
            .map(|r| r.user_id == ctx.user_id && r.status == ReservationStatus::Confirmed)
            .unwrap_or(false);
        if !valid {
            return Err(AppError::validation(
                "Dine-in orders require one of your confirmed reservations",
            ));
        }
        Ok(())
    }

    /// Attach lines to orders, preserving order ordering.
    async fn with_items(&self, orders: Vec<FoodOrder>) -> AppResult<Vec<OrderWithItems>> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
        let mut lines: HashMap<Uuid, Vec<FoodOrderItem>> = HashMap::new();
        for line in self.orders.find_items_for(&ids).await? {
            lines.entry(line.order_id).or_default().push(line);
        }
        Ok(orders
            .into_iter()
            .map(|order| {
                let items = lines.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }
}
