use std::fmt::{Debug, Display, Formatter};

use crate::{
    fmt::FormattedThousands,
    quantity::{price::LiterPrice, volume::Liters},
};

quantity!(
    /// Amount of money in the operator's currency.
    Cost, via: f64
);

implement_mul!(Liters, LiterPrice, Cost);

impl Cost {
    /// Whether the amount rounds to a negative number of cents.
    pub fn is_negative(self) -> bool {
        (self.0 * 100.0).round() < 0.0
    }

    /// Whether the amount rounds to a positive number of cents.
    pub fn is_positive(self) -> bool {
        (self.0 * 100.0).round() > 0.0
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{sign}${}", FormattedThousands { value: self.0.abs(), precision: 2 })
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$", self.0)
    }
}
