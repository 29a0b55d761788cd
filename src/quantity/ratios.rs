quantity!(
    /// Whole-number percentage entered by the operator, `0..=100`.
    Percentage, via: u16, suffix: "%", precision: 0
);

quantity!(
    /// Computed percentage of a whole, `0.0..=100.0`.
    Share, via: f64, suffix: "%", precision: 1
);

impl Percentage {
    pub const HUNDRED: Self = Self(100);

    /// Convert the percentage into `0.0..=1.0`.
    pub fn to_ratio(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Share {
    pub const HUNDRED: Self = Self(100.0);

    /// Convert the share into `0.0..=1.0`.
    pub fn to_ratio(self) -> f64 {
        self.0 / 100.0
    }

    /// Remaining share of the whole.
    pub fn complement(self) -> Self {
        Self::HUNDRED - self
    }
}
