use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Year the catalog ratings are computed against
pub const REFERENCE_YEAR: i32 = 3019;

const RATING_FACTOR: i64 = 80;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("production year {year} is later than reference year {reference}")]
    ProductionYearTooLate { year: i32, reference: i32 },
}

/// Rounds to two decimal places, half-up.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rating = 80 · speed · (0.5 if used else 1) / (REFERENCE_YEAR − year + 1), rounded to 2 dp.
///
/// `speed` is expected to be normalised (rounded) already.
pub fn compute_rating(
    speed: Decimal,
    is_used: bool,
    production_year: i32,
) -> Result<Decimal, RatingError> {
    let age = i64::from(REFERENCE_YEAR) - i64::from(production_year) + 1;
    if age <= 0 {
        return Err(RatingError::ProductionYearTooLate {
            year: production_year,
            reference: REFERENCE_YEAR,
        });
    }

    let wear = if is_used {
        Decimal::new(5, 1)
    } else {
        Decimal::ONE
    };

    let rating = Decimal::from(RATING_FACTOR) * speed * wear / Decimal::from(age);

    Ok(round2(rating))
}
