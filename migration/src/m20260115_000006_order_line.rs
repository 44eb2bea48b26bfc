use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000003_product::Product, m20260115_000005_order::Order};

static FK_ORDER_LINE_ORDER: &str = "fk_order_line_order_id";
static FK_ORDER_LINE_PRODUCT: &str = "fk_order_line_product_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderLine::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderLine::Id))
                    .col(integer(OrderLine::OrderId))
                    .col(integer(OrderLine::ProductId))
                    .col(integer(OrderLine::Quantity))
                    .col(decimal_len(OrderLine::Cost, 8, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDER_LINE_ORDER)
                            .from(OrderLine::Table, OrderLine::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ORDER_LINE_PRODUCT)
                            .from(OrderLine::Table, OrderLine::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderLine::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrderLine {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    Cost,
}
