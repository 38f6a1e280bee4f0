// ABOUTME: Application-wide constants for service identity and environment keys
// ABOUTME: Centralizes names shared by the logging, configuration, and CLI layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service names used in structured logs
pub mod service_names {
    /// Name reported by the analytics service and CLI
    pub const COACH_INSIGHTS: &str = "coach-insights";
}

/// Environment variable names for analytics threshold overrides
pub mod env_config {
    /// Slope magnitude under which volume is considered stable
    pub const TREND_STABLE_SLOPE: &str = "COACH_TREND_STABLE_SLOPE";
    /// Coefficient of variation above which volume is considered volatile
    pub const TREND_VOLATILITY_CV: &str = "COACH_TREND_VOLATILITY_CV";
    /// Number of trailing sessions examined for plateaus
    pub const PLATEAU_WINDOW: &str = "COACH_PLATEAU_WINDOW";
    /// Coefficient of variation under which a window counts as flat
    pub const PLATEAU_CV: &str = "COACH_PLATEAU_CV";
    /// Coefficient of variation under which a plateau is severe
    pub const PLATEAU_SEVERE_CV: &str = "COACH_PLATEAU_SEVERE_CV";
    /// Expected training sessions per week for adherence
    pub const EXPECTED_SESSIONS_PER_WEEK: &str = "COACH_EXPECTED_SESSIONS_PER_WEEK";
    /// Ideal number of rest days between sessions
    pub const IDEAL_GAP_DAYS: &str = "COACH_IDEAL_GAP_DAYS";
    /// Weight increment used when rounding suggested loads
    pub const WEIGHT_INCREMENT: &str = "COACH_WEIGHT_INCREMENT";
}
