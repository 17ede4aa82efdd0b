//! Menu item repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use plage_core::error::{AppError, ErrorKind};
use plage_core::result::AppResult;
use plage_entity::menu::FoodItem;
use plage_entity::menu::model::{CreateFoodItem, UpdateFoodItem};

/// Repository for menu item CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FoodItemRepository {
    pool: PgPool,
}

impl FoodItemRepository {
    /// Create a new menu item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a menu item by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<FoodItem>> {
        sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find menu item by id", e)
            })
    }

    /// List the items customers can order, grouped for the menu card.
    pub async fn find_available(&self) -> AppResult<Vec<FoodItem>> {
        sqlx::query_as::<_, FoodItem>(
            "SELECT * FROM food_items WHERE available ORDER BY category ASC, name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list available items", e)
        })
    }

    /// List every item including unavailable ones, for staff management.
    pub async fn find_all(&self) -> AppResult<Vec<FoodItem>> {
        sqlx::query_as::<_, FoodItem>("SELECT * FROM food_items ORDER BY category ASC, name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menu items", e))
    }

    /// Create a new menu item.
    pub async fn create(&self, data: &CreateFoodItem) -> AppResult<FoodItem> {
        sqlx::query_as::<_, FoodItem>(
            "INSERT INTO food_items (name, description, price, category, available, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.category)
        .bind(data.available)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu item", e))
    }

    /// Replace a menu item's fields.
    pub async fn update(&self, id: Uuid, data: &UpdateFoodItem) -> AppResult<FoodItem> {
        sqlx::query_as::<_, FoodItem>(
            "UPDATE food_items \
             SET name = $2, description = $3, price = $4, category = $5, \
                 available = $6, image_url = $7, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(&data.category)
        .bind(data.available)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu item", e))?
        .ok_or_else(|| AppError::not_found(format!("Menu item {id} not found")))
    }

    /// Delete a menu item.
    ///
    /// Items referenced by past orders are kept for history; the foreign
    /// key turns such a delete into a conflict.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM food_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("food_order_items_food_item_id_fkey") =>
                {
                    AppError::conflict("Menu item is referenced by existing orders")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete menu item", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
