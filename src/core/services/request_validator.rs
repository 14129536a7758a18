use std::sync::LazyLock;

use regex::Regex;

use crate::core::errors::{Result, ShiftSwapError};
use crate::core::models::swap_request::NewRequest;

/// Year, month, day, `T`, hour and minute. Seconds, fractions and
/// offsets may follow but are not checked.
static DATETIME_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}").expect("datetime pattern is valid")
});

/// Whether `value` looks like an ISO datetime such as `2026-01-12T07:00`.
///
/// This is a shape check only: `2026-13-45T99:99` passes.
pub fn is_iso_like(value: &str) -> bool {
    DATETIME_PREFIX.is_match(value)
}

/// Check a new request, collecting every missing or malformed field.
pub fn validate(input: &NewRequest) -> Result<()> {
    let mut bad = Vec::new();

    for (name, value) in [("from", &input.from), ("to", &input.to)] {
        if value.is_empty() || !is_iso_like(value) {
            bad.push(name.to_string());
        }
    }
    for (name, value) in [("with", &input.with), ("reason", &input.reason)] {
        if value.is_empty() {
            bad.push(name.to_string());
        }
    }

    if bad.is_empty() {
        Ok(())
    } else {
        Err(ShiftSwapError::Validation { fields: bad })
    }
}
