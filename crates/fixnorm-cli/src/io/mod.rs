pub mod log;
pub mod manifest;
pub mod report;
