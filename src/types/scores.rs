use crate::engine::validate::{check_score, parse_score, InvalidReason};
use serde::Deserialize;

/// Transcript file: an optional program id and the SGPAs in semester order.
///
/// ```toml
/// program = "4-year"
/// sgpa = [8.0, 9.0, "7.5", ""]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreFile {
    pub program: Option<String>,
    #[serde(default)]
    pub sgpa: Vec<RawScore>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Number(f64),
    Text(String),
}

impl RawScore {
    pub fn parse(&self) -> Result<Option<f64>, InvalidReason> {
        match self {
            RawScore::Number(value) => check_score(*value).map(Some),
            RawScore::Text(raw) => parse_score(raw),
        }
    }
}
