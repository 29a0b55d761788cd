//! Durations as exported by the telematics platform: `(1D, 22H, 8M)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{core::error::ParseError, quantity::time::Minutes};

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([0-9]+)D,\s*([0-9]+)H,\s*([0-9]+)M\)").expect("the duration pattern is valid")
});

/// Find the first `(<days>D, <hours>H, <minutes>M)` in the text and convert it to minutes.
pub fn parse(text: &str) -> Result<Minutes, ParseError> {
    let captures =
        PATTERN.captures(text).ok_or_else(|| ParseError::MalformedDuration(text.to_owned()))?;
    let component = |index: usize| {
        captures[index].parse::<u64>().map_err(|_| ParseError::OutOfRange(text.to_owned()))
    };
    let (days, hours, minutes) = (component(1)?, component(2)?, component(3)?);

    days.checked_mul(Minutes::PER_DAY)
        .zip(hours.checked_mul(Minutes::PER_HOUR))
        .and_then(|(days, hours)| days.checked_add(hours))
        .and_then(|total| total.checked_add(minutes))
        .map(Minutes)
        .ok_or_else(|| ParseError::OutOfRange(text.to_owned()))
}
