pub mod prelude;

pub mod order;
pub mod order_line;
pub mod place;
pub mod product;
pub mod product_category;
pub mod restaurant;
pub mod restaurant_menu_item;
pub mod sea_orm_active_enums;
