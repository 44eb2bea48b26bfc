use std::collections::HashMap;

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use entity::sea_orm_active_enums::PaymentMethod;

use crate::{
    model::order::OrderPayload,
    server::{
        data::{
            catalog::product::ProductRepository,
            order::{NewOrder, NewOrderLine, OrderRepository},
        },
        error::{order::OrderError, Error},
        util::validation::{
            validate_phonenumber, validate_required_text, MAX_ADDRESS_LEN, MAX_COMMENT_LEN,
            MAX_NAME_LEN,
        },
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    /// Creates a new instance of [`OrderService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and persists an order submission.
    ///
    /// A validation failure or an unknown product rejects the whole submission; the
    /// order and its lines only land together. Line costs snapshot the product price at
    /// submission time and are never recomputed.
    pub async fn register(&self, payload: OrderPayload) -> Result<entity::order::Model, Error> {
        let product_repo = ProductRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);

        if payload.products.is_empty() {
            return Err(OrderError::Validation {
                field: "products",
                message: "This list must not be empty.".to_string(),
            }
            .into());
        }

        validate_required_text(&payload.firstname, "firstname", MAX_NAME_LEN)?;
        validate_required_text(&payload.lastname, "lastname", MAX_NAME_LEN)?;
        validate_required_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
        let phonenumber = validate_phonenumber(&payload.phonenumber)?;

        let comment = payload.comment.unwrap_or_default();
        if comment.len() > MAX_COMMENT_LEN {
            return Err(OrderError::Validation {
                field: "comment",
                message: format!(
                    "This field is too long ({} chars, max {MAX_COMMENT_LEN}).",
                    comment.len()
                ),
            }
            .into());
        }

        for line in &payload.products {
            if line.quantity < 1 {
                return Err(OrderError::Validation {
                    field: "products",
                    message: format!("Quantity must be at least 1, got {}.", line.quantity),
                }
                .into());
            }
        }

        let product_ids: Vec<i32> = payload.products.iter().map(|line| line.product).collect();
        let products_by_id: HashMap<i32, entity::product::Model> = product_repo
            .get_by_ids(product_ids)
            .await?
            .into_iter()
            .map(|product| (product.id, product))
            .collect();

        let mut lines = Vec::with_capacity(payload.products.len());
        for line in &payload.products {
            let product = products_by_id
                .get(&line.product)
                .ok_or(OrderError::ProductNotFound(line.product))?;

            let cost = product.price * Decimal::from(line.quantity);

            lines.push(NewOrderLine {
                product_id: product.id,
                quantity: line.quantity,
                cost,
            });
        }

        let order = order_repo
            .create_with_lines(
                NewOrder {
                    firstname: payload.firstname,
                    lastname: payload.lastname,
                    phonenumber,
                    address: payload.address,
                    comment,
                    payment_method: payload
                        .payment_method
                        .map(PaymentMethod::from)
                        .unwrap_or(PaymentMethod::Cash),
                },
                lines,
            )
            .await?;

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectionTrait, DbBackend, DbErr, Schema};

    use crate::{
        model::order::{OrderLinePayload, OrderPayload},
        server::util::test::setup::{test_setup, TestSetup},
    };

    async fn setup() -> Result<TestSetup, DbErr> {
        let test = test_setup().await;

        let db = &test.state.db;
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

        Ok(test)
    }

    fn mock_order_payload(products: Vec<OrderLinePayload>) -> OrderPayload {
        OrderPayload {
            products,
            firstname: "Ivan".to_string(),
            lastname: "Petrov".to_string(),
            phonenumber: "+79991234567".to_string(),
            address: "Moscow, Red Square 1".to_string(),
            comment: None,
            payment_method: None,
        }
    }

    mod register_tests {
        use rust_decimal::Decimal;
        use sea_orm::{DbErr, EntityTrait};

        use entity::sea_orm_active_enums::PaymentMethod;

        use crate::{
            model::order::OrderLinePayload,
            server::{
                error::{order::OrderError, Error},
                service::order::{
                    tests::{mock_order_payload, setup},
                    OrderService,
                },
                util::test::setup::test_setup_create_product,
            },
        };

        /// Expect the order and its lines to land with costs frozen from current prices
        #[tokio::test]
        async fn test_register_success() -> Result<(), DbErr> {
            let test = setup().await?;
            let product = test_setup_create_product(&test, "Pizza").await.unwrap();

            let order_service = OrderService::new(&test.state.db);
            let payload = mock_order_payload(vec![OrderLinePayload {
                product: product.id,
                quantity: 2,
            }]);

            let result = order_service.register(payload).await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let order = result.unwrap();

            assert_eq!(order.payment_method, PaymentMethod::Cash);

            let lines = entity::prelude::OrderLine::find().all(&test.state.db).await?;
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].quantity, 2);
            // 250.50 × 2
            assert_eq!(lines[0].cost, Decimal::new(50100, 2));

            Ok(())
        }

        /// Expect a formatted phone number to be stored normalized
        #[tokio::test]
        async fn test_register_normalizes_phonenumber() -> Result<(), DbErr> {
            let test = setup().await?;
            let product = test_setup_create_product(&test, "Pizza").await.unwrap();

            let order_service = OrderService::new(&test.state.db);
            let mut payload = mock_order_payload(vec![OrderLinePayload {
                product: product.id,
                quantity: 1,
            }]);
            payload.phonenumber = "8 (999) 123-45-67".to_string();

            let order = order_service.register(payload).await.unwrap();

            assert_eq!(order.phonenumber, "+79991234567");

            Ok(())
        }

        /// Expect an empty product list to be rejected with a field error and no rows
        #[tokio::test]
        async fn test_register_empty_products_rejected() -> Result<(), DbErr> {
            let test = setup().await?;

            let order_service = OrderService::new(&test.state.db);
            let payload = mock_order_payload(vec![]);

            let result = order_service.register(payload).await;

            assert!(matches!(
                result,
                Err(Error::OrderError(OrderError::Validation {
                    field: "products",
                    ..
                }))
            ));

            let orders = entity::prelude::Order::find().all(&test.state.db).await?;
            assert!(orders.is_empty());

            Ok(())
        }

        /// Expect an unknown product to reject the whole submission with nothing persisted
        #[tokio::test]
        async fn test_register_unknown_product_rejected() -> Result<(), DbErr> {
            let test = setup().await?;
            let product = test_setup_create_product(&test, "Pizza").await.unwrap();

            let nonexistent_product_id = product.id + 1;
            let order_service = OrderService::new(&test.state.db);
            let payload = mock_order_payload(vec![
                OrderLinePayload {
                    product: product.id,
                    quantity: 1,
                },
                OrderLinePayload {
                    product: nonexistent_product_id,
                    quantity: 1,
                },
            ]);

            let result = order_service.register(payload).await;

            assert!(matches!(
                result,
                Err(Error::OrderError(OrderError::ProductNotFound(id))) if id == nonexistent_product_id
            ));

            let orders = entity::prelude::Order::find().all(&test.state.db).await?;
            let lines = entity::prelude::OrderLine::find().all(&test.state.db).await?;
            assert!(orders.is_empty());
            assert!(lines.is_empty());

            Ok(())
        }

        /// Expect a non-positive quantity to be rejected as a field error
        #[tokio::test]
        async fn test_register_zero_quantity_rejected() -> Result<(), DbErr> {
            let test = setup().await?;
            let product = test_setup_create_product(&test, "Pizza").await.unwrap();

            let order_service = OrderService::new(&test.state.db);
            let payload = mock_order_payload(vec![OrderLinePayload {
                product: product.id,
                quantity: 0,
            }]);

            let result = order_service.register(payload).await;

            assert!(matches!(
                result,
                Err(Error::OrderError(OrderError::Validation {
                    field: "products",
                    ..
                }))
            ));

            Ok(())
        }

        /// Expect an invalid phone number to be rejected as a field error
        #[tokio::test]
        async fn test_register_invalid_phonenumber_rejected() -> Result<(), DbErr> {
            let test = setup().await?;
            let product = test_setup_create_product(&test, "Pizza").await.unwrap();

            let order_service = OrderService::new(&test.state.db);
            let mut payload = mock_order_payload(vec![OrderLinePayload {
                product: product.id,
                quantity: 1,
            }]);
            payload.phonenumber = "+1 555 0100".to_string();

            let result = order_service.register(payload).await;

            assert!(matches!(
                result,
                Err(Error::OrderError(OrderError::Validation {
                    field: "phonenumber",
                    ..
                }))
            ));

            Ok(())
        }
    }
}
