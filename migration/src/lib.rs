pub use sea_orm_migration::prelude::*;

mod m20260115_000001_restaurant;
mod m20260115_000002_product_category;
mod m20260115_000003_product;
mod m20260115_000004_restaurant_menu_item;
mod m20260115_000005_order;
mod m20260115_000006_order_line;
mod m20260115_000007_place;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_restaurant::Migration),
            Box::new(m20260115_000002_product_category::Migration),
            Box::new(m20260115_000003_product::Migration),
            Box::new(m20260115_000004_restaurant_menu_item::Migration),
            Box::new(m20260115_000005_order::Migration),
            Box::new(m20260115_000006_order_line::Migration),
            Box::new(m20260115_000007_place::Migration),
        ]
    }
}
