pub mod aggregate;
pub mod dashboard;
pub mod range;
