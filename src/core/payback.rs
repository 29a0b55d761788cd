use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Time needed to recover an investment.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Payback<T> {
    Recoverable(T),

    /// The net benefit never covers the investment.
    Unrecoverable,
}

impl<T> Payback<T> {
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable(_))
    }

    pub fn recoverable(self) -> Option<T> {
        match self {
            Self::Recoverable(value) => Some(value),
            Self::Unrecoverable => None,
        }
    }
}

impl<T: Display> Display for Payback<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recoverable(value) => Display::fmt(value, f),
            Self::Unrecoverable => write!(f, "not recoverable"),
        }
    }
}
