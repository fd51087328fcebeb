use std::borrow::Cow;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{Result, StorageError};
use crate::models::{Ship, ShipType};

/// 2800-01-01T00:00:00Z
pub const MIN_PROD_DATE_MILLIS: i64 = 26_192_246_400_000;
/// 3019-01-01T00:00:00Z
pub const MAX_PROD_DATE_MILLIS: i64 = 33_103_209_600_000;

/// Ship as exposed over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipResponse {
    pub id: i64,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    /// Production date, epoch millis
    pub prod_date: i64,
    pub is_used: bool,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub speed: Decimal,
    pub crew_size: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub rating: Decimal,
}

/// Request payload for registering a new ship. Every field except `isUsed`
/// is required; the rating is always computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateShipRequest {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, max = 50, message = "Name must be between 1 and 50 characters")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Planet is required"),
        length(min = 1, max = 50, message = "Planet must be between 1 and 50 characters")
    )]
    pub planet: Option<String>,

    #[validate(required(message = "Ship type is required"))]
    pub ship_type: Option<ShipType>,

    /// Production date, epoch millis
    #[validate(
        required(message = "Production date is required"),
        custom(function = "validate_prod_date")
    )]
    pub prod_date: Option<i64>,

    /// Defaults to false
    pub is_used: Option<bool>,

    #[validate(
        required(message = "Speed is required"),
        custom(function = "validate_speed")
    )]
    #[schema(value_type = Option<f64>)]
    pub speed: Option<Decimal>,

    #[validate(
        required(message = "Crew size is required"),
        range(min = 1, max = 9999, message = "Crew size must be between 1 and 9999")
    )]
    pub crew_size: Option<i32>,
}

/// Request payload for a partial update. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be between 1 and 50 characters"))]
    pub name: Option<String>,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Planet must be between 1 and 50 characters"
    ))]
    pub planet: Option<String>,

    pub ship_type: Option<ShipType>,

    /// Production date, epoch millis
    #[validate(custom(function = "validate_prod_date"))]
    pub prod_date: Option<i64>,

    pub is_used: Option<bool>,

    #[validate(custom(function = "validate_speed"))]
    #[schema(value_type = Option<f64>)]
    pub speed: Option<Decimal>,

    #[validate(range(min = 1, max = 9999, message = "Crew size must be between 1 and 9999"))]
    pub crew_size: Option<i32>,
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_prod_date(millis: i64) -> std::result::Result<(), ValidationError> {
    if (MIN_PROD_DATE_MILLIS..=MAX_PROD_DATE_MILLIS).contains(&millis) {
        Ok(())
    } else {
        Err(invalid(
            "prod_date_out_of_range",
            "Production date must be between 2800-01-01 and 3019-01-01",
        ))
    }
}

fn validate_speed(speed: &Decimal) -> std::result::Result<(), ValidationError> {
    let min = Decimal::new(1, 2);
    let max = Decimal::new(99, 2);

    if *speed >= min && *speed <= max {
        Ok(())
    } else {
        Err(invalid(
            "speed_out_of_range",
            "Speed must be between 0.01 and 0.99",
        ))
    }
}

/// Converts an epoch-millis production date. Validated dates always convert.
pub fn prod_date_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        StorageError::Validation({
            let mut errors = validator::ValidationErrors::new();
            errors.add(
                "prod_date",
                invalid("prod_date_out_of_range", "Production date is not representable"),
            );
            errors
        })
    })
}

/// Parses an id taken from a request path.
///
/// The id must be a positive whole number; a zero fractional part is accepted
/// (`"5.0"` is 5) but `"5.5"`, `"-5"` and non-numbers are rejected. Surrounding
/// whitespace is ignored.
pub fn parse_ship_id(raw: &str) -> Result<i64> {
    let invalid_id = || StorageError::InvalidId(raw.to_string());
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<i64>() {
        return if id > 0 { Ok(id) } else { Err(invalid_id()) };
    }

    let value: f64 = raw.parse().map_err(|_| invalid_id())?;
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value >= i64::MAX as f64 {
        return Err(invalid_id());
    }

    Ok(value as i64)
}

impl From<Ship> for ShipResponse {
    fn from(ship: Ship) -> Self {
        Self {
            id: ship.id,
            prod_date: ship.prod_date_millis(),
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type,
            is_used: ship.is_used,
            speed: ship.speed,
            crew_size: ship.crew_size,
            rating: ship.rating,
        }
    }
}
