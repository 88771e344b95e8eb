pub mod dashboard;
pub mod navigation;
pub mod report;
