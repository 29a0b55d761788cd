#[macro_use]
pub mod macros;

pub mod currency;
pub mod price;
pub mod ratios;
pub mod time;
pub mod volume;
mod zero;

pub use self::zero::Zero;
