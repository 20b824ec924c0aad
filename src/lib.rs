//! Connection config for devices served by the Modbus-IP plugin.
//!
//! The plugin framework deserializes each device's data section into a
//! [`DeviceConnectionConfig`], calls [`DeviceConnectionConfig::validate`] once
//! at startup, and from then on only reads it.

pub mod config;
pub mod duration;
pub mod error;

pub use config::DeviceConnectionConfig;
pub use error::{ConfigError, Result};

/// Timeout used when a device does not set one
pub const DEFAULT_TIMEOUT: &str = "5s";
