use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::duration;
use crate::error::{ConfigError, Result};
use crate::DEFAULT_TIMEOUT;

/// Connection settings for one Modbus-IP device, taken from the device's
/// data section. Every key is optional when deserializing; `validate`
/// enforces the required ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeviceConnectionConfig {
    /// Hostname or ip of the device to connect to
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host: String,

    /// TCP port of the device
    #[serde(skip_serializing_if = "is_zero_u16")]
    pub port: u16,

    /// The modbus slave id (unit identifier) behind the connection
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub slave_id: u32,

    /// How long to wait for a modbus request to resolve, e.g. `5s` or `1h30m`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeout: String,

    /// When set, a device read fails as soon as one of the device's outputs
    /// fails to read. Otherwise the failure is only logged.
    #[serde(skip_serializing_if = "is_false")]
    pub fail_on_error: bool,
}

fn is_zero_u16(v: &u16) -> bool {
    *v == 0
}

fn is_zero_u32(v: &u32) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl DeviceConnectionConfig {
    /// Parse a YAML document. Nothing is validated here.
    pub fn from_yaml(doc: &str) -> Result<Self> {
        let data: serde_yaml::Value = serde_yaml::from_str(doc)?;
        Self::from_data(data)
    }

    /// Build from an already parsed device data section. An empty (null)
    /// section gives the zero record.
    pub fn from_data(data: serde_yaml::Value) -> Result<Self> {
        let config: Self = if data.is_null() {
            Self::default()
        } else {
            serde_yaml::from_value(data)?
        };
        log::trace!("parsed device config: {:?}", &config);
        Ok(config)
    }

    /// Parse and validate in one go.
    pub fn load(doc: &str) -> Result<Self> {
        let mut config = Self::from_yaml(doc)?;
        config.validate()?;
        log::debug!("loaded device config for {}", config.address());
        Ok(config)
    }

    /// Gets the timeout as a duration.
    pub fn timeout(&self) -> Result<Duration> {
        duration::parse(&self.timeout)
    }

    /// `host:port` of the device
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Fill in values for the optional keys that were left unset.
    pub fn apply_defaults(&mut self) {
        if self.timeout.is_empty() {
            log::debug!("no timeout set for {}, using {}", self.host, DEFAULT_TIMEOUT);
            self.timeout = DEFAULT_TIMEOUT.to_string();
        }
    }

    /// Makes sure the required keys are set, then applies defaults.
    pub fn validate(&mut self) -> Result<()> {
        if self.host.is_empty() {
            return Err(self.missing("host"));
        }
        if self.port == 0 {
            return Err(self.missing("port"));
        }
        self.apply_defaults();
        Ok(())
    }

    fn missing(&self, field: &'static str) -> ConfigError {
        ConfigError::MissingRequiredField {
            field,
            config: format!("{:?}", self),
        }
    }
}
