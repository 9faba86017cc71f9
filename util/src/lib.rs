pub mod config;
pub mod grading_config;
pub mod logging;
