pub mod catalog;
pub mod query;
pub mod rating;

pub use catalog::ShipCatalog;
