use serde::Serialize;

use crate::quantity::{
    currency::Cost,
    ratios::Share,
    time::{Hours, Minutes},
    volume::Liters,
};

/// Time, fuel and money attributed to one activity.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Usage {
    pub time: Minutes,

    /// Share of the total time.
    pub share: Share,

    pub fuel: Liters,
    pub cost: Cost,
}

impl Usage {
    pub fn hours(&self) -> Hours {
        self.time.into()
    }

    /// Same usage summed over the number of units, the share stays intact.
    pub fn times(self, n_units: u32) -> Self {
        let factor = f64::from(n_units);
        Self {
            time: self.time * n_units,
            share: self.share,
            fuel: self.fuel * factor,
            cost: self.cost * factor,
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UsageSplit {
    pub idle: Usage,
    pub moving: Usage,
    pub total: Usage,
}

impl UsageSplit {
    pub fn times(self, n_units: u32) -> Self {
        Self {
            idle: self.idle.times(n_units),
            moving: self.moving.times(n_units),
            total: self.total.times(n_units),
        }
    }
}
