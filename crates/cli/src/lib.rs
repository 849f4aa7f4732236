pub mod file_utils;
pub mod model;
pub mod report;
