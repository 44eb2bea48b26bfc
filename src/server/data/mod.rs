//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organizing data
//! access by domain (catalog, orders, and the persisted geocode cache).

pub mod catalog;
pub mod order;
pub mod place;
