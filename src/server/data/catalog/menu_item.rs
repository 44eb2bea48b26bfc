use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

pub struct MenuItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a menu entry tying a product to a restaurant.
    ///
    /// The (restaurant, product) pair is unique; inserting a second entry for the same
    /// pair fails with a database error.
    pub async fn create(
        &self,
        restaurant_id: i32,
        product_id: i32,
        availability: bool,
    ) -> Result<entity::restaurant_menu_item::Model, DbErr> {
        let menu_item = entity::restaurant_menu_item::ActiveModel {
            restaurant_id: ActiveValue::Set(restaurant_id),
            product_id: ActiveValue::Set(product_id),
            availability: ActiveValue::Set(availability),
            ..Default::default()
        };

        menu_item.insert(self.db).await
    }

    /// Flip a menu entry's availability, independently of its product and restaurant
    pub async fn set_availability(
        &self,
        menu_item_id: i32,
        availability: bool,
    ) -> Result<Option<entity::restaurant_menu_item::Model>, DbErr> {
        let menu_item = match entity::prelude::RestaurantMenuItem::find_by_id(menu_item_id)
            .one(self.db)
            .await?
        {
            Some(menu_item) => menu_item,
            None => return Ok(None),
        };

        let mut menu_item_am = menu_item.into_active_model();
        menu_item_am.availability = ActiveValue::Set(availability);

        let menu_item = menu_item_am.update(self.db).await?;

        Ok(Some(menu_item))
    }

    /// All menu entries currently marked available, in one query.
    ///
    /// This is the snapshot source for a restaurant-matching pass.
    pub async fn get_available(&self) -> Result<Vec<entity::restaurant_menu_item::Model>, DbErr> {
        entity::prelude::RestaurantMenuItem::find()
            .filter(entity::restaurant_menu_item::Column::Availability.eq(true))
            .all(self.db)
            .await
    }
}
