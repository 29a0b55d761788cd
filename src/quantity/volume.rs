quantity!(Liters, via: f64, suffix: "L", precision: 2);
