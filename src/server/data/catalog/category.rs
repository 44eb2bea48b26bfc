use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

pub struct ProductCategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductCategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::product_category::Model, DbErr> {
        let category = entity::product_category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    /// Batch load categories, used to decorate product listings without per-product queries
    pub async fn get_by_ids(
        &self,
        category_ids: Vec<i32>,
    ) -> Result<Vec<entity::product_category::Model>, DbErr> {
        entity::prelude::ProductCategory::find()
            .filter(entity::product_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await
    }

    /// Deletes a category; products referencing it keep existing with a nulled category
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProductCategory::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
