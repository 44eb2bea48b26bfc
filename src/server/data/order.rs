use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, TransactionTrait,
};

use entity::sea_orm_active_enums::{OrderStatus, PaymentMethod};

/// Customer fields of a new order, validated upstream
pub struct NewOrder {
    pub firstname: String,
    pub lastname: String,
    pub phonenumber: String,
    pub address: String,
    pub comment: String,
    pub payment_method: PaymentMethod,
}

/// One line of a new order; `cost` snapshots the product price at submission time
pub struct NewOrderLine {
    pub product_id: i32,
    pub quantity: i32,
    pub cost: Decimal,
}

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order together with all of its lines in one transaction.
    ///
    /// Either the order and every line land, or nothing does.
    pub async fn create_with_lines(
        &self,
        new_order: NewOrder,
        lines: Vec<NewOrderLine>,
    ) -> Result<entity::order::Model, DbErr> {
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            firstname: ActiveValue::Set(new_order.firstname),
            lastname: ActiveValue::Set(new_order.lastname),
            phonenumber: ActiveValue::Set(new_order.phonenumber),
            address: ActiveValue::Set(new_order.address),
            status: ActiveValue::Set(OrderStatus::Unprocessed),
            comment: ActiveValue::Set(new_order.comment),
            registered_at: ActiveValue::Set(Utc::now().naive_utc()),
            called_at: ActiveValue::Set(None),
            delivered_at: ActiveValue::Set(None),
            payment_method: ActiveValue::Set(new_order.payment_method),
            restaurant_id: ActiveValue::Set(None),
            ..Default::default()
        };

        let order = order.insert(&txn).await?;

        let lines = lines
            .into_iter()
            .map(|line| entity::order_line::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(line.product_id),
                quantity: ActiveValue::Set(line.quantity),
                cost: ActiveValue::Set(line.cost),
                ..Default::default()
            });

        entity::prelude::OrderLine::insert_many(lines)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(order)
    }

    pub async fn get_unprocessed(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::Status.eq(OrderStatus::Unprocessed))
            .order_by_asc(entity::order::Column::RegisteredAt)
            .all(self.db)
            .await
    }

    /// Batch load the lines of many orders in one query
    pub async fn get_lines_by_order_ids(
        &self,
        order_ids: Vec<i32>,
    ) -> Result<Vec<entity::order_line::Model>, DbErr> {
        entity::prelude::OrderLine::find()
            .filter(entity::order_line::Column::OrderId.is_in(order_ids))
            .all(self.db)
            .await
    }

    pub async fn assign_restaurant(
        &self,
        order_id: i32,
        restaurant_id: i32,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let order = match entity::prelude::Order::find_by_id(order_id)
            .one(self.db)
            .await?
        {
            Some(order) => order,
            None => return Ok(None),
        };

        let mut order_am = order.into_active_model();
        order_am.restaurant_id = ActiveValue::Set(Some(restaurant_id));

        let order = order_am.update(self.db).await?;

        Ok(Some(order))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use entity::sea_orm_active_enums::PaymentMethod;

    use crate::server::{data::order::NewOrder, util::test::setup::test_setup};

    async fn setup() -> Result<DatabaseConnection, DbErr> {
        let test = test_setup().await;

        let db = test.state.db;
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::ProductCategory),
            schema.create_table_from_entity(entity::prelude::Product),
            schema.create_table_from_entity(entity::prelude::Restaurant),
            schema.create_table_from_entity(entity::prelude::Order),
            schema.create_table_from_entity(entity::prelude::OrderLine),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(db)
    }

    fn mock_new_order() -> NewOrder {
        NewOrder {
            firstname: "Ivan".to_string(),
            lastname: "Petrov".to_string(),
            phonenumber: "+79991234567".to_string(),
            address: "Moscow, Red Square 1".to_string(),
            comment: String::new(),
            payment_method: PaymentMethod::Cash,
        }
    }

    async fn insert_product(
        db: &DatabaseConnection,
        name: &str,
    ) -> Result<entity::product::Model, DbErr> {
        use crate::server::data::catalog::product::ProductRepository;

        ProductRepository::new(db)
            .create(name, None, Decimal::new(45000, 2), "products/pizza.jpg", false, "")
            .await
    }

    mod create_with_lines_tests {
        use rust_decimal::Decimal;
        use sea_orm::{DbErr, EntityTrait};

        use entity::sea_orm_active_enums::OrderStatus;

        use crate::server::data::order::{
            tests::{insert_product, mock_new_order, setup},
            NewOrderLine, OrderRepository,
        };

        /// Expect the order and all of its lines to be created together
        #[tokio::test]
        async fn test_create_with_lines_success() -> Result<(), DbErr> {
            let db = setup().await?;
            let product = insert_product(&db, "Pizza").await?;

            let order_repo = OrderRepository::new(&db);
            let result = order_repo
                .create_with_lines(
                    mock_new_order(),
                    vec![NewOrderLine {
                        product_id: product.id,
                        quantity: 2,
                        cost: Decimal::new(90000, 2),
                    }],
                )
                .await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let order = result.unwrap();

            assert_eq!(order.status, OrderStatus::Unprocessed);
            assert_eq!(order.restaurant_id, None);

            let lines = entity::prelude::OrderLine::find().all(&db).await?;
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].order_id, order.id);
            assert_eq!(lines[0].cost, Decimal::new(90000, 2));

            Ok(())
        }

        /// Expect no order row to survive when a line references a nonexistent product
        #[tokio::test]
        async fn test_create_with_lines_rolls_back() -> Result<(), DbErr> {
            let db = setup().await?;

            let nonexistent_product_id = 1;
            let order_repo = OrderRepository::new(&db);
            let result = order_repo
                .create_with_lines(
                    mock_new_order(),
                    vec![NewOrderLine {
                        product_id: nonexistent_product_id,
                        quantity: 1,
                        cost: Decimal::new(45000, 2),
                    }],
                )
                .await;

            assert!(result.is_err());

            let orders = entity::prelude::Order::find().all(&db).await?;
            assert!(orders.is_empty());

            Ok(())
        }
    }

    mod get_unprocessed_tests {
        use rust_decimal::Decimal;
        use sea_orm::DbErr;

        use crate::server::data::order::{
            tests::{insert_product, mock_new_order, setup},
            NewOrderLine, OrderRepository,
        };

        /// Expect newly registered orders to show up as unprocessed, with their lines
        /// loadable in one batch
        #[tokio::test]
        async fn test_get_unprocessed_with_lines() -> Result<(), DbErr> {
            let db = setup().await?;
            let product = insert_product(&db, "Pizza").await?;

            let order_repo = OrderRepository::new(&db);
            let order = order_repo
                .create_with_lines(
                    mock_new_order(),
                    vec![NewOrderLine {
                        product_id: product.id,
                        quantity: 1,
                        cost: Decimal::new(45000, 2),
                    }],
                )
                .await?;

            let unprocessed = order_repo.get_unprocessed().await?;
            assert_eq!(unprocessed.len(), 1);
            assert_eq!(unprocessed[0].id, order.id);

            let lines = order_repo.get_lines_by_order_ids(vec![order.id]).await?;
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].product_id, product.id);

            Ok(())
        }

        /// Expect an empty list when no orders exist
        #[tokio::test]
        async fn test_get_unprocessed_empty() -> Result<(), DbErr> {
            let db = setup().await?;

            let order_repo = OrderRepository::new(&db);
            let unprocessed = order_repo.get_unprocessed().await?;

            assert!(unprocessed.is_empty());

            Ok(())
        }
    }

    mod assign_restaurant_tests {
        use rust_decimal::Decimal;
        use sea_orm::DbErr;

        use crate::server::data::{
            catalog::restaurant::RestaurantRepository,
            order::{
                tests::{insert_product, mock_new_order, setup},
                NewOrderLine, OrderRepository,
            },
        };

        /// Expect the restaurant reference to be stored on the order
        #[tokio::test]
        async fn test_assign_restaurant_success() -> Result<(), DbErr> {
            let db = setup().await?;
            let product = insert_product(&db, "Pizza").await?;
            let restaurant = RestaurantRepository::new(&db)
                .create("Pizza Point", "Moscow, Arbat 1", "+79991234567")
                .await?;

            let order_repo = OrderRepository::new(&db);
            let order = order_repo
                .create_with_lines(
                    mock_new_order(),
                    vec![NewOrderLine {
                        product_id: product.id,
                        quantity: 1,
                        cost: Decimal::new(45000, 2),
                    }],
                )
                .await?;

            let updated = order_repo
                .assign_restaurant(order.id, restaurant.id)
                .await?
                .unwrap();

            assert_eq!(updated.restaurant_id, Some(restaurant.id));

            Ok(())
        }

        /// Expect deleting a restaurant to fail while an order references it
        #[tokio::test]
        async fn test_referenced_restaurant_deletion_blocked() -> Result<(), DbErr> {
            let db = setup().await?;
            let product = insert_product(&db, "Pizza").await?;
            let restaurant_repo = RestaurantRepository::new(&db);
            let restaurant = restaurant_repo
                .create("Pizza Point", "Moscow, Arbat 1", "+79991234567")
                .await?;

            let order_repo = OrderRepository::new(&db);
            let order = order_repo
                .create_with_lines(
                    mock_new_order(),
                    vec![NewOrderLine {
                        product_id: product.id,
                        quantity: 1,
                        cost: Decimal::new(45000, 2),
                    }],
                )
                .await?;

            order_repo.assign_restaurant(order.id, restaurant.id).await?;

            let result = restaurant_repo.delete(restaurant.id).await;

            assert!(result.is_err());

            Ok(())
        }
    }
}
