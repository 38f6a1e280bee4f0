// ABOUTME: Environment configuration for the coach insights library and CLI
// ABOUTME: Loads logging options and analytics threshold overrides, then validates them
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration

use crate::logging::LoggingConfig;
use coach_core::errors::AppResult;
use coach_intelligence::AnalyticsConfig;
use serde_json::{json, Value};
use tracing::info;

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Analytics thresholds
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a `COACH_*` override cannot be parsed
    /// or the resulting thresholds are inconsistent
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            analytics: AnalyticsConfig::from_environment()?,
        };
        info!(
            plateau_window = config.analytics.plateau.window,
            expected_sessions_per_week = config.analytics.consistency.expected_sessions_per_week,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Summary suitable for printing or logging
    #[must_use]
    pub fn summary(&self) -> Value {
        json!({
            "service": {
                "name": self.logging.service_name,
                "version": self.logging.service_version,
            },
            "logging": {
                "level": self.logging.level,
                "format": format!("{:?}", self.logging.format),
            },
            "analytics": self.analytics,
        })
    }
}
