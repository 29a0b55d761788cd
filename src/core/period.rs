use chrono::NaiveDate;
use serde::Serialize;

use crate::core::error::ValidationError;

/// Number of calendar days the entered figures were collected over.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReportingPeriod {
    days: u32,
}

impl ReportingPeriod {
    /// Inclusive date range: a single day yields a one-day period.
    pub fn try_from_dates(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end });
        }
        let days = u32::try_from((end - start).num_days() + 1)
            .map_err(|_| ValidationError::InvalidDateRange { start, end })?;
        Ok(Self { days })
    }

    pub const fn try_from_days(days: u32) -> Result<Self, ValidationError> {
        if days == 0 { Err(ValidationError::EmptyPeriod) } else { Ok(Self { days }) }
    }

    pub const fn days(self) -> u32 {
        self.days
    }
}
