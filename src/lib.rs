//! CGPA calculation for YGPA-weighted degree programs.
//!
//! Two entry points make up the engine: [`validate`] checks a single raw SGPA input and
//! [`calculate`] folds a program's semester SGPAs into year averages and a weighted CGPA.
//! Both are pure and may be called from any thread.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod types;

pub use engine::{calculate, parse_score, validate, InvalidReason, Validation};
pub use error::{CgpaError, Result};
pub use types::degree::DegreeProgram;
pub use types::result::{CgpaResult, PerformanceBand};
