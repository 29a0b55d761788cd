use serde::Serialize;

use crate::{
    core::{duration, error::ParseError},
    quantity::time::Minutes,
};

/// Time a single unit spent idling and moving over the reporting period.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TimeSplit {
    pub idle: Minutes,
    pub moving: Minutes,
}

impl TimeSplit {
    pub const fn new(idle: Minutes, moving: Minutes) -> Self {
        Self { idle, moving }
    }

    /// Parse both durations, failing on the first malformed one.
    pub fn try_parse(idle: &str, moving: &str) -> Result<Self, ParseError> {
        Ok(Self::new(duration::parse(idle)?, duration::parse(moving)?))
    }

    /// Idle and moving time together, `None` if the sum does not fit the minute counter.
    pub const fn checked_total(self) -> Option<Minutes> {
        self.idle.checked_add(self.moving)
    }
}
