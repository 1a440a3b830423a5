//! Exporter configuration.
//!
//! The binary fills an [`ExporterConfig`] from command-line flags; the library
//! validates it and hands back the compiled alarm filter.

use std::path::PathBuf;
use std::time::Duration;

use crate::rpc::AlarmFilter;

/// Errors detected before any collection starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid alarm filter {pattern:?}: {source}")]
    InvalidAlarmFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("no targets configured")]
    NoTargets,

    #[error("scrape interval must be greater than zero")]
    InvalidInterval,
}

/// Options passed to the OpenSSH client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    /// Login name; empty leaves it to `~/.ssh/config`.
    pub user: String,
    /// Identity file passed with `-i`.
    pub keyfile: Option<PathBuf>,
    /// Port used when a target carries none.
    pub port: u16,
    pub connect_timeout: Duration,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            user: String::new(),
            keyfile: None,
            port: 22,
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// Optional collectors. Interfaces and alarms are always collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorToggles {
    pub bgp: bool,
    pub ospf: bool,
    pub isis: bool,
    pub routes: bool,
    pub routing_engine: bool,
    pub environment: bool,
    pub interface_diagnostics: bool,
}

impl Default for CollectorToggles {
    fn default() -> Self {
        Self {
            bgp: true,
            ospf: true,
            isis: false,
            routes: true,
            routing_engine: true,
            environment: true,
            interface_diagnostics: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExporterConfig {
    pub targets: Vec<String>,
    pub ssh: SshConfig,
    /// Regex matched against alarm descriptions and types; matches are not counted.
    pub alarm_filter: Option<String>,
    pub collectors: CollectorToggles,
    pub interval: Duration,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            ssh: SshConfig::default(),
            alarm_filter: None,
            collectors: CollectorToggles::default(),
            interval: Duration::from_secs(30),
        }
    }
}

impl ExporterConfig {
    /// Checks the configuration without touching the network and compiles
    /// the alarm filter. This is the only place the pattern is compiled.
    pub fn validate(&self) -> Result<AlarmFilter, ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }
        if self.interval.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }
        match self.alarm_filter.as_deref() {
            Some(pattern) => AlarmFilter::new(pattern),
            None => Ok(AlarmFilter::none()),
        }
    }
}

/// Splits a comma-separated target list, dropping empty entries.
pub fn parse_targets(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
