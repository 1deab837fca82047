//! Engine configuration loaded from environment variables.
//!
//! The engine has only a couple of knobs; everything else (which trophies
//! exist, what their thresholds are) lives in the trophy catalog.

use std::env;

/// Engine configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Persist refreshed progress for progressive trophies while unearned.
    /// Batch sweeps over large user sets may want this off.
    pub refresh_progress: bool,
    /// Minimum change (in percentage points) before a progress refresh is
    /// written back. 0.0 writes every change.
    pub min_progress_delta: f64,
}

impl Default for EngineConfig {
    /// Default config, also used in tests.
    fn default() -> Self {
        Self {
            refresh_progress: true,
            min_progress_delta: 0.0,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing variables fall back to defaults; unparsable values do too.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();
        Self {
            refresh_progress: env::var("TROPHY_REFRESH_PROGRESS")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(defaults.refresh_progress),
            min_progress_delta: env::var("TROPHY_MIN_PROGRESS_DELTA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_progress_delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.refresh_progress);
        assert_eq!(config.min_progress_delta, 0.0);
    }

    #[test]
    fn test_from_env_overrides() {
        env::set_var("TROPHY_REFRESH_PROGRESS", "false");
        env::set_var("TROPHY_MIN_PROGRESS_DELTA", "2.5");

        let config = EngineConfig::from_env();

        assert!(!config.refresh_progress);
        assert_eq!(config.min_progress_delta, 2.5);

        env::remove_var("TROPHY_REFRESH_PROGRESS");
        env::remove_var("TROPHY_MIN_PROGRESS_DELTA");
    }
}
