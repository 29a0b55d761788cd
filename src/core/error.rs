use chrono::NaiveDate;

use crate::quantity::{currency::Cost, price::LiterPrice, ratios::Percentage, volume::Liters};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("`{0}` does not match the `(<days>D, <hours>H, <minutes>M)` format")]
    MalformedDuration(String),

    #[error("`{0}` exceeds the supported duration range")]
    OutOfRange(String),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("total idle and moving time must not be zero")]
    ZeroDuration,

    #[error("total idle and moving time exceeds the supported duration range")]
    DurationOverflow,

    #[error("total fuel consumption must be positive, got {0}")]
    NonPositiveFuel(Liters),

    #[error("fuel price must be positive, got {0}")]
    NonPositivePrice(LiterPrice),

    #[error("start date {start} must not be after end date {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("reporting period must span at least one day")]
    EmptyPeriod,

    #[error("the fleet must have at least one unit")]
    NoUnits,

    #[error("{name} must be within 0–100%, got {value}")]
    PercentageOutOfRange { name: &'static str, value: Percentage },

    #[error("{name} must be a non-negative amount, got {value}")]
    NegativeCost { name: &'static str, value: Cost },
}
