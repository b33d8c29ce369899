//! Domain model, configuration and display helpers shared by the off-plan
//! catalog crates.

pub mod app_config;
pub mod config;
pub mod error;
pub mod format;
pub mod property;
pub mod wire;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, NormalizeError};
pub use property::{AgentContact, PaymentPlan, PropertyId, PropertyRecord, UnitRecord};
pub use wire::{normalize_property, RawProperty};
