//! Configuration management: environment loading and defaults.

pub mod app_config;

pub use app_config::{AppConfig, LogoFailurePolicy};
