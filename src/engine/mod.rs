pub mod aggregate;
pub mod validate;
pub mod year;

pub use aggregate::calculate;
pub use validate::{parse_score, validate, InvalidReason, Validation};
