//! Menu management: the public card and the staff catalogue.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use plage_core::{AppError, AppResult};
use plage_database::repositories::FoodItemRepository;
use plage_entity::menu::{CreateFoodItem, FoodItem, UpdateFoodItem};

use crate::context::RequestContext;

/// Service for the restaurant menu.
#[derive(Debug)]
pub struct MenuService {
    items: Arc<FoodItemRepository>,
}

impl MenuService {
    pub fn new(items: Arc<FoodItemRepository>) -> Self {
        Self { items }
    }

    /// The public menu: available items only, grouped by category.
    pub async fn list_available(&self) -> AppResult<Vec<FoodItem>> {
        self.items.find_available().await
    }

    /// Every item including unavailable ones. Staff only.
    pub async fn list_all(&self, ctx: &RequestContext) -> AppResult<Vec<FoodItem>> {
        ctx.require_admin()?;
        self.items.find_all().await
    }

    /// Add a dish to the menu. Staff only.
    pub async fn create(&self, ctx: &RequestContext, data: CreateFoodItem) -> AppResult<FoodItem> {
        ctx.require_admin()?;
        validate_item(&data.name, &data.category, data.price)?;
        let item = self.items.create(&data).await?;
        info!(item_id = %item.id, name = %item.name, "Menu item created");
        Ok(item)
    }

    /// Replace a dish's details. Staff only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateFoodItem,
    ) -> AppResult<FoodItem> {
        ctx.require_admin()?;
        validate_item(&data.name, &data.category, data.price)?;
        let item = self.items.update(id, &data).await?;
        info!(item_id = %id, "Menu item updated");
        Ok(item)
    }

    /// Remove a dish from the menu. Staff only.
    ///
    /// Items referenced by past orders cannot be removed; mark them
    /// unavailable instead.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        if !self.items.delete(id).await? {
            return Err(AppError::not_found(format!("Menu item {id} not found")));
        }
        info!(item_id = %id, "Menu item deleted");
        Ok(())
    }
}

fn validate_item(name: &str, category: &str, price: Decimal) -> AppResult<()> {
    if name.trim().is_empty() || category.trim().is_empty() {
        return Err(AppError::validation("Name and category are required"));
    }
    if price <= Decimal::ZERO {
        return Err(AppError::validation("Price must be positive"));
    }
    Ok(())
}
