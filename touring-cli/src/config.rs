//! Tour building configuration.

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use touring_core::prelude::{GenericResult, InfoLogger, InsertionMode};

/// A tour building configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies insertion mode. Default is cheapest insertion.
    pub mode: Option<InsertionMode>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    #[serde(default)]
    pub enabled: bool,
}

impl Config {
    /// Returns insertion mode: the one passed explicitly has precedence over the configured one.
    pub fn get_mode(&self, mode: Option<InsertionMode>) -> InsertionMode {
        mode.or(self.mode).unwrap_or_default()
    }

    /// Creates a logger if logging is enabled.
    pub fn create_logger(&self) -> Option<InfoLogger> {
        match &self.logging {
            Some(LoggingConfig { enabled: true }) => Some(Arc::new(|msg: &str| eprintln!("{msg}"))),
            _ => None,
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
