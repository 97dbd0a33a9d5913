// Sol-1 - Byte Summation Sketch
// Copyright (C) 2026 Andrii Shylenko
//
// This software is released under the MIT License.
// See the LICENSE file in the project root for full license information.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default schema version for YAML configs
fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_baud_rate() -> u32 {
    sol_sketch::BAUD_RATE
}

fn default_interval_ms() -> u32 {
    sol_sketch::LOOP_INTERVAL_MS
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported schema_version '{0}'. Supported versions: '1.0'")]
    UnsupportedSchema(String),
    #[error("'baud_rate' must be greater than zero")]
    ZeroBaudRate,
    #[error("Invalid 'max_console_bytes' value '{0}'")]
    InvalidConsoleLimit(String),
    #[error("'max_console_bytes' must be greater than zero")]
    ZeroConsoleLimit,
}

/// Run configuration for the host runner.
///
/// Every field has a default, so an empty document is a valid config that
/// behaves like the firmware: 9600 baud, 500 ms interval, forever.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SketchConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
    /// Loop iterations before the runner exits. `None` runs forever.
    #[serde(default)]
    pub iterations: Option<u64>,
    /// Console output cap, e.g. "4KB" or "512". `None` is unlimited.
    #[serde(default)]
    pub max_console_bytes: Option<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            baud_rate: default_baud_rate(),
            interval_ms: default_interval_ms(),
            iterations: None,
            max_console_bytes: None,
        }
    }
}

impl SketchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sketch config at {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping.
        let config: Self = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(contents).context("Failed to parse Sketch Config YAML")?
        };
        config.validate()?;

        tracing::debug!(
            baud_rate = config.baud_rate,
            interval_ms = config.interval_ms,
            iterations = ?config.iterations,
            "Loaded sketch config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schema_version != "1.0" {
            return Err(ConfigError::UnsupportedSchema(self.schema_version.clone()));
        }

        if self.baud_rate == 0 {
            return Err(ConfigError::ZeroBaudRate);
        }

        if self.console_limit()? == Some(0) {
            return Err(ConfigError::ZeroConsoleLimit);
        }

        Ok(())
    }

    /// Console byte cap in bytes, if one is configured.
    pub fn console_limit(&self) -> Result<Option<u64>, ConfigError> {
        let Some(raw) = &self.max_console_bytes else {
            return Ok(None);
        };

        let trimmed = raw.trim();
        if let Ok(bytes) = trimmed.parse::<u64>() {
            return Ok(Some(bytes));
        }

        parse_size(trimmed)
            .map(Some)
            .map_err(|_| ConfigError::InvalidConsoleLimit(raw.clone()))
    }
}

pub fn parse_size(size_str: &str) -> Result<u64> {
    use human_size::{Byte, Size, SpecificSize};
    let s: Size = size_str
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid size format: {}", e))?;
    let bytes: SpecificSize<Byte> = s.into();
    Ok(bytes.value() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = SketchConfig::from_yaml("").unwrap();
        assert_eq!(config, SketchConfig::default());
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.interval_ms, 500);
        assert_eq!(config.iterations, None);
        assert_eq!(config.console_limit().unwrap(), None);
    }

    #[test]
    fn test_zero_baud_rejected() {
        let config = SketchConfig {
            baud_rate: 0,
            ..SketchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBaudRate));
    }

    #[test]
    fn test_plain_byte_count_limit() {
        let config = SketchConfig {
            max_console_bytes: Some(" 4096 ".to_string()),
            ..SketchConfig::default()
        };
        assert_eq!(config.console_limit().unwrap(), Some(4096));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = SketchConfig {
            max_console_bytes: Some("0".to_string()),
            ..SketchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroConsoleLimit));
    }

    #[test]
    fn test_garbage_limit_rejected() {
        let config = SketchConfig {
            max_console_bytes: Some("plenty".to_string()),
            ..SketchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidConsoleLimit("plenty".to_string()))
        );
    }
}
