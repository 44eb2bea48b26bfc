use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000002_product_category::ProductCategory;

static FK_PRODUCT_CATEGORY: &str = "fk_product_category_id";
static IDX_PRODUCT_SPECIAL: &str = "idx_product_special";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::Name))
                    .col(integer_null(Product::CategoryId))
                    .col(decimal_len(Product::Price, 8, 2))
                    .col(string(Product::Image))
                    .col(boolean(Product::Special).default(false))
                    .col(text(Product::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PRODUCT_CATEGORY)
                            .from(Product::Table, Product::CategoryId)
                            .to(ProductCategory::Table, ProductCategory::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PRODUCT_SPECIAL)
                    .table(Product::Table)
                    .col(Product::Special)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PRODUCT_SPECIAL)
                    .table(Product::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    Name,
    CategoryId,
    Price,
    Image,
    Special,
    Description,
}
