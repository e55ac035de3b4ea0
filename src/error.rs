use crate::engine::validate::InvalidReason;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CgpaError {
    #[error("unknown degree program: {0} (expected one of 4-year, 3-year, 2-year, 1-year, lateral-entry)")]
    UnknownProgram(String),

    #[error("semester {semester}: {reason}")]
    InvalidScore {
        semester: usize,
        reason: InvalidReason,
    },

    #[error("too many semester scores: {given} given, program has {max} semesters")]
    TooManyScores { given: usize, max: usize },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CgpaError {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownProgram(_) | Self::InvalidScore { .. } | Self::TooManyScores { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CgpaError>;
