use rust_decimal::Decimal;
use sea_orm::{
    sea_query::Query, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        category_id: Option<i32>,
        price: Decimal,
        image: &str,
        special: bool,
        description: &str,
    ) -> Result<entity::product::Model, DbErr> {
        let product = entity::product::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category_id: ActiveValue::Set(category_id),
            price: ActiveValue::Set(price),
            image: ActiveValue::Set(image.to_string()),
            special: ActiveValue::Set(special),
            description: ActiveValue::Set(description.to_string()),
            ..Default::default()
        };

        product.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        product_id: i32,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(product_id)
            .one(self.db)
            .await
    }

    /// Batch load products by id, used to validate order lines in one query
    pub async fn get_by_ids(
        &self,
        product_ids: Vec<i32>,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids))
            .all(self.db)
            .await
    }

    /// Products currently available for ordering.
    ///
    /// Availability is derived, not stored on the product: a product qualifies iff at
    /// least one menu item referencing it is marked available.
    pub async fn get_available(&self) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(
                entity::product::Column::Id.in_subquery(
                    Query::select()
                        .column(entity::restaurant_menu_item::Column::ProductId)
                        .from(entity::prelude::RestaurantMenuItem)
                        .and_where(entity::restaurant_menu_item::Column::Availability.eq(true))
                        .to_owned(),
                ),
            )
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::server::util::test::setup::test_setup;

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::ProductCategory),
            schema.create_table_from_entity(entity::prelude::Product),
            schema.create_table_from_entity(entity::prelude::Restaurant),
            schema.create_table_from_entity(entity::prelude::RestaurantMenuItem),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    mod create_tests {
        use rust_decimal::Decimal;
        use sea_orm::DbErr;

        use crate::server::data::catalog::product::{tests::setup, ProductRepository};

        /// Expect success when creating a product without a category
        #[tokio::test]
        async fn test_create_product_no_category() -> Result<(), DbErr> {
            let db = setup().await?;
            let product_repo = ProductRepository::new(&db);

            let result = product_repo
                .create(
                    "Pepperoni",
                    None,
                    Decimal::new(52000, 2),
                    "products/pepperoni.jpg",
                    true,
                    "Spicy pepperoni pizza",
                )
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();

            assert_eq!(created.category_id, None);
            assert_eq!(created.price, Decimal::new(52000, 2));
            assert!(created.special);

            Ok(())
        }
    }

    mod get_available_tests {
        use rust_decimal::Decimal;
        use sea_orm::DbErr;

        use crate::server::data::catalog::{
            menu_item::MenuItemRepository,
            product::{tests::setup, ProductRepository},
            restaurant::RestaurantRepository,
        };

        /// Expect only products carried by at least one available menu item
        #[tokio::test]
        async fn test_get_available_filters_unavailable() -> Result<(), DbErr> {
            let db = setup().await?;
            let product_repo = ProductRepository::new(&db);
            let restaurant_repo = RestaurantRepository::new(&db);
            let menu_item_repo = MenuItemRepository::new(&db);

            let restaurant = restaurant_repo
                .create("Pizza Point", "Moscow, Arbat 1", "+79991234567")
                .await?;

            let pizza = product_repo
                .create("Pizza", None, Decimal::new(45000, 2), "products/pizza.jpg", false, "")
                .await?;
            let cola = product_repo
                .create("Cola", None, Decimal::new(9000, 2), "products/cola.jpg", false, "")
                .await?;

            menu_item_repo.create(restaurant.id, pizza.id, true).await?;
            menu_item_repo.create(restaurant.id, cola.id, false).await?;

            let available = product_repo.get_available().await?;

            assert_eq!(available.len(), 1);
            assert_eq!(available[0].id, pizza.id);

            Ok(())
        }

        /// Expect a product listed once even when several restaurants carry it
        #[tokio::test]
        async fn test_get_available_deduplicates() -> Result<(), DbErr> {
            let db = setup().await?;
            let product_repo = ProductRepository::new(&db);
            let restaurant_repo = RestaurantRepository::new(&db);
            let menu_item_repo = MenuItemRepository::new(&db);

            let first = restaurant_repo
                .create("Pizza Point", "Moscow, Arbat 1", "+79991234567")
                .await?;
            let second = restaurant_repo
                .create("Burger Barn", "Moscow, Tverskaya 7", "+79997654321")
                .await?;

            let pizza = product_repo
                .create("Pizza", None, Decimal::new(45000, 2), "products/pizza.jpg", false, "")
                .await?;

            menu_item_repo.create(first.id, pizza.id, true).await?;
            menu_item_repo.create(second.id, pizza.id, true).await?;

            let available = product_repo.get_available().await?;

            assert_eq!(available.len(), 1);

            Ok(())
        }
    }
}
