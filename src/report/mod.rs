pub mod json;
pub mod md;

use crate::error::{CgpaError, Result};
use crate::types::report::CalculationReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(OutputFormat::Json),
            "md" => Ok(OutputFormat::Md),
            other => Err(CgpaError::ConfigParse(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

pub fn render(report: &CalculationReport, format: OutputFormat, decimals: usize) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(CgpaError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report, decimals)),
    }
}
