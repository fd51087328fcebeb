use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Ship category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "ship_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

/// A stored catalog entry.
///
/// `rating` is derived from `speed`, `is_used` and the production year and is
/// rewritten on every create and update.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Ship {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: Decimal,
    pub crew_size: i32,
    pub rating: Decimal,
}

impl Ship {
    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }

    pub fn prod_date_millis(&self) -> i64 {
        self.prod_date.timestamp_millis()
    }
}

/// A ship that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewShip {
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    pub prod_date: DateTime<Utc>,
    pub is_used: bool,
    pub speed: Decimal,
    pub crew_size: i32,
    pub rating: Decimal,
}

impl NewShip {
    pub fn with_id(self, id: i64) -> Ship {
        Ship {
            id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: self.prod_date,
            is_used: self.is_used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: self.rating,
        }
    }
}
