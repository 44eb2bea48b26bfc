use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_restaurant::Restaurant, m20260115_000003_product::Product,
};

static FK_MENU_ITEM_RESTAURANT: &str = "fk_restaurant_menu_item_restaurant_id";
static FK_MENU_ITEM_PRODUCT: &str = "fk_restaurant_menu_item_product_id";
static IDX_MENU_ITEM_AVAILABILITY: &str = "idx_restaurant_menu_item_availability";
static IDX_MENU_ITEM_RESTAURANT_PRODUCT: &str = "idx_restaurant_menu_item_restaurant_product";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantMenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantMenuItem::Id))
                    .col(integer(RestaurantMenuItem::RestaurantId))
                    .col(integer(RestaurantMenuItem::ProductId))
                    .col(boolean(RestaurantMenuItem::Availability).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MENU_ITEM_RESTAURANT)
                            .from(RestaurantMenuItem::Table, RestaurantMenuItem::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MENU_ITEM_PRODUCT)
                            .from(RestaurantMenuItem::Table, RestaurantMenuItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A restaurant carries at most one menu entry per product
        manager
            .create_index(
                Index::create()
                    .name(IDX_MENU_ITEM_RESTAURANT_PRODUCT)
                    .table(RestaurantMenuItem::Table)
                    .col(RestaurantMenuItem::RestaurantId)
                    .col(RestaurantMenuItem::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENU_ITEM_AVAILABILITY)
                    .table(RestaurantMenuItem::Table)
                    .col(RestaurantMenuItem::Availability)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENU_ITEM_AVAILABILITY)
                    .table(RestaurantMenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENU_ITEM_RESTAURANT_PRODUCT)
                    .table(RestaurantMenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RestaurantMenuItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RestaurantMenuItem {
    Table,
    Id,
    RestaurantId,
    ProductId,
    Availability,
}
