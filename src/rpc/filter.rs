use regex::Regex;

use crate::config::ConfigError;

/// Excludes alarms whose description or type matches a pattern.
///
/// The pattern is compiled once; clones share nothing mutable and can be
/// evaluated from any thread.
#[derive(Debug, Clone, Default)]
pub struct AlarmFilter {
    pattern: Option<Regex>,
}

impl AlarmFilter {
    /// A filter that keeps every alarm.
    pub fn none() -> Self {
        Self { pattern: None }
    }

    /// Compiles `pattern`. An empty pattern disables filtering.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        if pattern.is_empty() {
            return Ok(Self::none());
        }

        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidAlarmFilter {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: Some(regex),
        })
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Returns true when the alarm must not be counted.
    pub fn should_filter(&self, description: &str, alarm_type: &str) -> bool {
        match &self.pattern {
            Some(re) => re.is_match(description) || re.is_match(alarm_type),
            None => false,
        }
    }
}
