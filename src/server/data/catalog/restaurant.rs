use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, DeleteResult, EntityTrait,
};

pub struct RestaurantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RestaurantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        address: &str,
        contact_phone: &str,
    ) -> Result<entity::restaurant::Model, DbErr> {
        let restaurant = entity::restaurant::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            address: ActiveValue::Set(address.to_string()),
            contact_phone: ActiveValue::Set(contact_phone.to_string()),
            ..Default::default()
        };

        restaurant.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find().all(self.db).await
    }

    pub async fn get_by_id(
        &self,
        restaurant_id: i32,
    ) -> Result<Option<entity::restaurant::Model>, DbErr> {
        entity::prelude::Restaurant::find_by_id(restaurant_id)
            .one(self.db)
            .await
    }

    /// Deletes a restaurant
    ///
    /// The order foreign key is declared RESTRICT, so deletion fails with a database
    /// error while any order still references the restaurant.
    pub async fn delete(&self, restaurant_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Restaurant::delete_by_id(restaurant_id)
            .exec(self.db)
            .await
    }
}
