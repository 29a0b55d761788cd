use std::ops::Mul;

quantity!(Minutes, via: u64, suffix: "min", precision: 0);
quantity!(Hours, via: f64, suffix: "h", precision: 2);
quantity!(Days, via: f64, suffix: "days", precision: 2);
quantity!(Months, via: f64, suffix: "months", precision: 2);

impl Minutes {
    pub const PER_HOUR: u64 = 60;
    pub const PER_DAY: u64 = 24 * Self::PER_HOUR;

    /// Sum of two durations, `None` on overflow.
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(total) => Some(Self(total)),
            None => None,
        }
    }
}

/// Summing the same duration across a number of vehicles.
impl Mul<u32> for Minutes {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl From<Minutes> for Hours {
    #[expect(clippy::cast_precision_loss)]
    fn from(minutes: Minutes) -> Self {
        Self(minutes.0 as f64 / Minutes::PER_HOUR as f64)
    }
}
