use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_restaurant::Restaurant;

static FK_ORDER_RESTAURANT: &str = "fk_order_restaurant_id";
static IDX_ORDER_STATUS: &str = "idx_order_status";
static IDX_ORDER_REGISTERED_AT: &str = "idx_order_registered_at";
static IDX_ORDER_PAYMENT_METHOD: &str = "idx_order_payment_method";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string(Order::Firstname))
                    .col(string(Order::Lastname))
                    .col(string(Order::Phonenumber))
                    .col(string(Order::Address))
                    .col(string_len(Order::Status, 32).default("Unprocessed"))
                    .col(text(Order::Comment))
                    .col(timestamp(Order::RegisteredAt))
                    .col(timestamp_null(Order::CalledAt))
                    .col(timestamp_null(Order::DeliveredAt))
                    .col(string_len(Order::PaymentMethod, 32))
                    .col(integer_null(Order::RestaurantId))
                    .foreign_key(
                        // Restaurant deletion is blocked while any order references it
                        ForeignKey::create()
                            .name(FK_ORDER_RESTAURANT)
                            .from(Order::Table, Order::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_STATUS)
                    .table(Order::Table)
                    .col(Order::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_REGISTERED_AT)
                    .table(Order::Table)
                    .col(Order::RegisteredAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ORDER_PAYMENT_METHOD)
                    .table(Order::Table)
                    .col(Order::PaymentMethod)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_PAYMENT_METHOD)
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_REGISTERED_AT)
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ORDER_STATUS)
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    Firstname,
    Lastname,
    Phonenumber,
    Address,
    Status,
    Comment,
    RegisteredAt,
    CalledAt,
    DeliveredAt,
    PaymentMethod,
    RestaurantId,
}
