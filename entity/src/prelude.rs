pub use super::order::Entity as Order;
pub use super::order_line::Entity as OrderLine;
pub use super::place::Entity as Place;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::restaurant::Entity as Restaurant;
pub use super::restaurant_menu_item::Entity as RestaurantMenuItem;
