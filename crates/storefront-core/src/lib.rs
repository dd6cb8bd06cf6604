pub mod app_config;
pub mod catalog;
pub mod config;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{Category, Group, Promotion};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::{
    Product, ProductPatch, DEFAULT_DETAIL, DEFAULT_DISCOUNT_COLOR, POPULAR_SOLD_THRESHOLD,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
