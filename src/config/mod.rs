//! Configuration loading and management for the report service.
//!
//! # Example
//!
//! ```no_run
//! use production_reports::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Seed data: {}", config.config().data.seed_dir.display());
//! ```

mod loader;
mod types;

pub(crate) use loader::load_yaml;
pub use loader::ConfigLoader;
pub use types::{DataConfig, LoggingConfig, ServerConfig, ServiceConfig};
