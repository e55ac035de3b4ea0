use crate::error::CgpaError;
use crate::types::degree::DegreeProgram;
use serde::Deserialize;

pub const DEFAULT_DECIMALS: usize = 2;
pub const MAX_DECIMALS: usize = 6;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CgpaConfig {
    pub defaults: Option<DefaultsConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultsConfig {
    pub program: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    pub decimals: Option<usize>,
}

impl CgpaConfig {
    pub fn default_program(&self) -> Result<DegreeProgram, CgpaError> {
        match self
            .defaults
            .as_ref()
            .and_then(|defaults| defaults.program.as_deref())
        {
            Some(name) => name.parse(),
            None => Ok(DegreeProgram::FourYear),
        }
    }

    pub fn default_format(&self) -> Option<&str> {
        self.defaults
            .as_ref()
            .and_then(|defaults| defaults.format.as_deref())
    }

    pub fn decimals(&self) -> usize {
        self.display
            .as_ref()
            .and_then(|display| display.decimals)
            .unwrap_or(DEFAULT_DECIMALS)
    }

    pub fn validate(&self) -> Result<(), CgpaError> {
        self.default_program()?;
        if let Some(format) = self.default_format() {
            if !matches!(format, "md" | "json") {
                return Err(CgpaError::ConfigParse(format!(
                    "defaults.format must be \"md\" or \"json\", got \"{format}\""
                )));
            }
        }
        if self.decimals() > MAX_DECIMALS {
            return Err(CgpaError::ConfigParse(format!(
                "display.decimals must be at most {MAX_DECIMALS}, got {}",
                self.decimals()
            )));
        }
        Ok(())
    }
}
