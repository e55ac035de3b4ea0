pub mod config;
pub mod degree;
pub mod report;
pub mod result;
pub mod scores;
