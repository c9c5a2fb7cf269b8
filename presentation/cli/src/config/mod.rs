pub mod app_config;
pub mod scanner_config;
