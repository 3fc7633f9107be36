//! Configuration domain module

mod app_config;
mod output_format;

pub use app_config::AppConfig;
pub use output_format::OutputFormat;
