use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::common::PageRequest;
use crate::models::ShipType;

/// Sort key for ship listings. Sorting is always ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipOrder {
    #[default]
    Id,
    Speed,
    Date,
    Rating,
}

/// Search criteria. Every field is optional and a ship must satisfy all the
/// ones that are set. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    pub name: Option<String>,
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Earliest production date, epoch millis
    pub after: Option<i64>,
    /// Latest production date, epoch millis
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<Decimal>,
    pub max_speed: Option<Decimal>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    pub min_rating: Option<Decimal>,
    pub max_rating: Option<Decimal>,
}

/// Query string accepted by the list and count endpoints
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ShipQuery {
    /// Substring of the ship name (case-sensitive)
    pub name: Option<String>,
    /// Substring of the planet (case-sensitive)
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Produced at or after, epoch millis
    pub after: Option<i64>,
    /// Produced at or before, epoch millis
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    #[param(value_type = Option<f64>)]
    pub min_speed: Option<Decimal>,
    #[param(value_type = Option<f64>)]
    pub max_speed: Option<Decimal>,
    pub min_crew_size: Option<i32>,
    pub max_crew_size: Option<i32>,
    #[param(value_type = Option<f64>)]
    pub min_rating: Option<Decimal>,
    #[param(value_type = Option<f64>)]
    pub max_rating: Option<Decimal>,
    /// Sort key, defaults to ID
    pub order: Option<ShipOrder>,
    /// Zero-based page index, defaults to 0
    pub page_number: Option<u32>,
    /// Defaults to 3
    pub page_size: Option<u32>,
}

impl ShipQuery {
    pub fn into_parts(self) -> (ShipFilter, ShipOrder, PageRequest) {
        let order = self.order.unwrap_or_default();
        let page = PageRequest::new(self.page_number, self.page_size);
        (self.into_filter(), order, page)
    }

    pub fn into_filter(self) -> ShipFilter {
        ShipFilter {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            after: self.after,
            before: self.before,
            is_used: self.is_used,
            min_speed: self.min_speed,
            max_speed: self.max_speed,
            min_crew_size: self.min_crew_size,
            max_crew_size: self.max_crew_size,
            min_rating: self.min_rating,
            max_rating: self.max_rating,
        }
    }
}
