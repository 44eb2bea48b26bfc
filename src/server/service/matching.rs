//! Restaurant-matching engine.
//!
//! Given a collection of orders, determines for each order the set of restaurants able
//! to fulfill it in full: every distinct product of the order must be carried by the
//! restaurant and currently marked available.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        catalog::{menu_item::MenuItemRepository, restaurant::RestaurantRepository},
        order::OrderRepository,
    },
    error::Error,
};

/// One consistent snapshot of menu availability, indexed per restaurant.
///
/// Built once per matching pass and reused across every order in the pass; evaluating
/// an order is a pure subset test with hashed membership, no further queries.
pub struct AvailabilityIndex {
    products_by_restaurant: HashMap<i32, HashSet<i32>>,
}

impl AvailabilityIndex {
    /// Build the index from the available (restaurant, product) pairs of one snapshot
    pub fn build(menu_items: &[entity::restaurant_menu_item::Model]) -> Self {
        let mut products_by_restaurant: HashMap<i32, HashSet<i32>> = HashMap::new();

        for menu_item in menu_items {
            products_by_restaurant
                .entry(menu_item.restaurant_id)
                .or_default()
                .insert(menu_item.product_id);
        }

        Self {
            products_by_restaurant,
        }
    }

    /// Restaurants whose available products cover every product of the order.
    ///
    /// Quantities are irrelevant here; fulfillment is about product coverage. An empty
    /// product set is vacuously covered by every indexed restaurant — order submission
    /// rejects empty orders before this point, so the case is unreachable through the API.
    pub fn eligible_restaurants(&self, order_products: &HashSet<i32>) -> Vec<i32> {
        self.products_by_restaurant
            .iter()
            .filter(|(_, available)| order_products.is_subset(available))
            .map(|(restaurant_id, _)| *restaurant_id)
            .collect()
    }
}

pub struct MatchingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchingService<'a> {
    /// Creates a new instance of [`MatchingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// For each given order, the restaurants able to fulfill it in full.
    ///
    /// All inputs are batch-loaded up front: one query for the availability snapshot,
    /// one for the restaurants, one for every order's lines. The snapshot is read once,
    /// so availability changes mid-computation cannot skew the pass.
    pub async fn match_orders(
        &self,
        orders: &[entity::order::Model],
    ) -> Result<HashMap<i32, Vec<entity::restaurant::Model>>, Error> {
        let menu_item_repo = MenuItemRepository::new(self.db);
        let restaurant_repo = RestaurantRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);

        let menu_items = menu_item_repo.get_available().await?;
        let index = AvailabilityIndex::build(&menu_items);

        let restaurants: HashMap<i32, entity::restaurant::Model> = restaurant_repo
            .get_all()
            .await?
            .into_iter()
            .map(|restaurant| (restaurant.id, restaurant))
            .collect();

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let lines = order_repo.get_lines_by_order_ids(order_ids).await?;

        // Distinct product set per order; a product referenced by two lines counts once
        let mut products_by_order: HashMap<i32, HashSet<i32>> = HashMap::new();
        for line in &lines {
            products_by_order
                .entry(line.order_id)
                .or_default()
                .insert(line.product_id);
        }

        let empty = HashSet::new();
        let mut matches = HashMap::new();

        for order in orders {
            let products = products_by_order.get(&order.id).unwrap_or(&empty);

            let eligible = index
                .eligible_restaurants(products)
                .into_iter()
                .filter_map(|restaurant_id| restaurants.get(&restaurant_id).cloned())
                .collect();

            matches.insert(order.id, eligible);
        }

        Ok(matches)
    }
}
