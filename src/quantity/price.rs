quantity!(
    /// Fuel price per liter.
    LiterPrice, via: f64, suffix: "$/L", precision: 2
);
