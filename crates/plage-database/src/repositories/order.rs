//! Food order repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use plage_core::error::{AppError, ErrorKind};
use plage_core::result::AppResult;
use plage_entity::order::{
    FoodOrder, FoodOrderItem, FoodOrderWithOwner, NewFoodOrder, OrderStatus,
};

/// Repository for food order CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FoodOrderRepository {
    pool: PgPool,
}

impl FoodOrderRepository {
    /// Create a new food order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist an order and its lines in one transaction.
    pub async fn create(&self, data: &NewFoodOrder) -> AppResult<FoodOrder> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to open transaction", e)
        })?;

        let order = sqlx::query_as::<_, FoodOrder>(
            "INSERT INTO food_orders \
             (user_id, order_type, reservation_id, delivery_address, total_price) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.order_type)
        .bind(data.reservation_id)
        .bind(&data.delivery_address)
        .bind(data.total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))?;

        for item in &data.items {
            sqlx::query(
                "INSERT INTO food_order_items (order_id, food_item_id, quantity, unit_price) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(order.id)
            .bind(item.food_item_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to store order line", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit order", e)
        })?;

        Ok(order)
    }

    /// Find an order by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FoodOrder>> {
        sqlx::query_as::<_, FoodOrder>("SELECT * FROM food_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find order by id", e)
            })
    }

    /// List a customer's orders, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<FoodOrder>> {
        sqlx::query_as::<_, FoodOrder>(
            "SELECT * FROM food_orders WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user orders", e))
    }

    /// List every order joined with the ordering account's contact
    /// details, newest first. Used by the staff order screen.
    pub async fn find_all_with_owner(&self) -> AppResult<Vec<FoodOrderWithOwner>> {
        sqlx::query_as::<_, FoodOrderWithOwner>(
            "SELECT o.*, u.email AS owner_email, \
                    u.first_name AS owner_first_name, u.last_name AS owner_last_name \
             FROM food_orders o \
             JOIN users u ON u.id = o.user_id \
             ORDER BY o.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    /// Fetch the lines of a set of orders in one round trip.
    pub async fn find_items_for(&self, order_ids: &[Uuid]) -> AppResult<Vec<FoodOrderItem>> {
        sqlx::query_as::<_, FoodOrderItem>(
            "SELECT * FROM food_order_items WHERE order_id = ANY($1) ORDER BY id",
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list order lines", e))
    }

    /// Move an order to a new kitchen status.
    pub async fn update_status(&self, id: Uuid, status: OrderStatus) -> AppResult<FoodOrder> {
        sqlx::query_as::<_, FoodOrder>(
            "UPDATE food_orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update order status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }
}
