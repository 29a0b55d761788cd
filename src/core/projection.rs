use serde::Serialize;

use crate::{core::period::ReportingPeriod, quantity::currency::Cost};

/// Loss over the reporting period, extrapolated from its daily rate.
///
/// Weeks, months and years are fixed 7, 30 and 365 days regardless of the period or the calendar.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LossProjection {
    /// Loss over the whole reporting period.
    pub total: Cost,

    pub daily: Cost,
    pub weekly: Cost,
    pub monthly: Cost,
    pub annual: Cost,
}

impl LossProjection {
    pub const DAYS_PER_WEEK: f64 = 7.0;
    pub const DAYS_PER_MONTH: f64 = 30.0;
    pub const DAYS_PER_YEAR: f64 = 365.0;

    pub fn over(total: Cost, period: ReportingPeriod) -> Self {
        let daily = total / f64::from(period.days());
        Self {
            total,
            daily,
            weekly: daily * Self::DAYS_PER_WEEK,
            monthly: daily * Self::DAYS_PER_MONTH,
            annual: daily * Self::DAYS_PER_YEAR,
        }
    }
}

/// A figure for a single unit next to the same figure for the whole fleet.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scaled<T> {
    pub unit: T,
    pub fleet: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_day_ok() {
        let projection = LossProjection::over(Cost(3000.0), ReportingPeriod::try_from_days(1).unwrap());
        assert_eq!(projection.daily, Cost(3000.0));
        assert_eq!(projection.weekly, Cost(21_000.0));
        assert_eq!(projection.monthly, Cost(90_000.0));
        assert_eq!(projection.annual, Cost(1_095_000.0));
    }

    #[test]
    fn multiples_of_daily_rate() {
        let projection =
            LossProjection::over(Cost(19_560.717), ReportingPeriod::try_from_days(13).unwrap());
        assert_eq!(projection.total, Cost(19_560.717));
        assert_eq!(projection.weekly, projection.daily * 7.0);
        assert_eq!(projection.monthly, projection.daily * 30.0);
        assert_eq!(projection.annual, projection.daily * 365.0);
    }
}
