use bon::bon;
use serde::Serialize;

use crate::{
    core::error::ValidationError,
    quantity::{
        Zero,
        currency::Cost,
        price::LiterPrice,
        ratios::Percentage,
        volume::Liters,
    },
};

/// Per-unit fuel figures, fleet size, and the monitoring service offer.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FleetParameters {
    /// Fuel consumed by a single unit over the reporting period.
    pub fuel_total: Liters,

    pub price: LiterPrice,
    pub unit_count: u32,

    /// One-time hardware cost per unit.
    pub purchase_cost_per_unit: Cost,

    /// Monitoring service rent per unit.
    pub monthly_rent_per_unit: Cost,

    /// Expected idle loss reduction with the monitoring in place.
    pub idle_reduction: Percentage,

    /// Share of the measured idle time considered genuine waste.
    pub real_idle: Percentage,
}

#[bon]
impl FleetParameters {
    /// Fuel and price positivity is checked by [`crate::core::economics::compute`].
    #[builder]
    pub fn new(
        fuel_total: Liters,
        price: LiterPrice,
        unit_count: u32,
        #[builder(default = Cost::ZERO)] purchase_cost_per_unit: Cost,
        #[builder(default = Cost::ZERO)] monthly_rent_per_unit: Cost,
        idle_reduction: Percentage,
        #[builder(default = Percentage::HUNDRED)] real_idle: Percentage,
    ) -> Result<Self, ValidationError> {
        if unit_count == 0 {
            return Err(ValidationError::NoUnits);
        }
        for (name, value) in [("idle reduction", idle_reduction), ("real idle", real_idle)] {
            if value > Percentage::HUNDRED {
                return Err(ValidationError::PercentageOutOfRange { name, value });
            }
        }
        for (name, value) in
            [("purchase cost", purchase_cost_per_unit), ("monthly rent", monthly_rent_per_unit)]
        {
            if !value.0.is_finite() || value < Cost::ZERO {
                return Err(ValidationError::NegativeCost { name, value });
            }
        }
        Ok(Self {
            fuel_total,
            price,
            unit_count,
            purchase_cost_per_unit,
            monthly_rent_per_unit,
            idle_reduction,
            real_idle,
        })
    }
}

impl FleetParameters {
    pub fn total_purchase_cost(&self) -> Cost {
        self.purchase_cost_per_unit * f64::from(self.unit_count)
    }

    /// Monitoring rent for the whole fleet.
    pub fn monthly_service_cost(&self) -> Cost {
        self.monthly_rent_per_unit * f64::from(self.unit_count)
    }
}
