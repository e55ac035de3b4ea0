use serde::Serialize;
use std::fmt;

pub const MIN_SGPA: f64 = 0.0;
pub const MAX_SGPA: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvalidReason {
    NotANumber,
    OutOfRange,
}

impl InvalidReason {
    pub fn code(self) -> &'static str {
        match self {
            InvalidReason::NotANumber => "not-a-number",
            InvalidReason::OutOfRange => "out-of-range",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            InvalidReason::NotANumber => "must be a valid number",
            InvalidReason::OutOfRange => "must be between 0 and 10",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub reason: Option<InvalidReason>,
}

impl Validation {
    fn from_parse(parsed: Result<Option<f64>, InvalidReason>) -> Self {
        match parsed {
            Ok(_) => Self {
                valid: true,
                reason: None,
            },
            Err(reason) => Self {
                valid: false,
                reason: Some(reason),
            },
        }
    }
}

/// Checks one semester's raw SGPA input. A missing or blank value is valid and means
/// "not yet available".
pub fn validate(candidate: Option<&str>) -> Validation {
    Validation::from_parse(parse_score(candidate.unwrap_or_default()))
}

/// Parses a raw SGPA, returning `None` for blank input.
pub fn parse_score(raw: &str) -> Result<Option<f64>, InvalidReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed.parse().map_err(|_| InvalidReason::NotANumber)?;
    check_score(value).map(Some)
}

/// Range check for an already-numeric SGPA.
pub fn check_score(value: f64) -> Result<f64, InvalidReason> {
    if !value.is_finite() {
        return Err(InvalidReason::NotANumber);
    }
    if !(MIN_SGPA..=MAX_SGPA).contains(&value) {
        return Err(InvalidReason::OutOfRange);
    }
    Ok(value)
}
