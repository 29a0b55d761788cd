pub mod amortization;
pub mod duration;
pub mod economics;
pub mod error;
pub mod fleet;
pub mod payback;
pub mod period;
pub mod projection;
pub mod split;
pub mod usage;
