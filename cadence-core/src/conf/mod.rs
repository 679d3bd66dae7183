mod analysis_config;
mod error;


pub use analysis_config::AnalysisConfig;
pub use error::ConfigError;
