// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Inactivity-return checker: earned by coming back after a long break.

use serde::Deserialize;

use super::{binary_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;

#[derive(Debug, Deserialize)]
struct InactivityParams {
    /// Gap length the upstream pipeline uses before flagging inactivity,
    /// must be positive. Kept on the trophy for display; the detection
    /// itself happens upstream.
    inactive_days: u32,
}

/// Checker for "was flagged inactive, then worked out again".
///
/// The statistics pipeline sets `last_inactive_date` only once a gap of at
/// least `inactive_days` has elapsed, so this checker just needs the marker
/// plus a workout strictly after it.
pub struct InactivityChecker {
    inactive_days: u32,
}

impl InactivityChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: InactivityParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;
        if params.inactive_days == 0 {
            return Err(EngineError::InvalidParams(
                "inactive_days must be positive".to_string(),
            ));
        }
        Ok(Self {
            inactive_days: params.inactive_days,
        })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

impl TrophyChecker for InactivityChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        match (
            input.stats.last_inactive_date,
            input.stats.last_workout_date,
        ) {
            (Some(inactive), Some(workout)) => workout > inactive,
            _ => false,
        }
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        binary_progress(self.check(input))
    }

    fn target_display(&self) -> String {
        format!("return after {} days off", self.inactive_days)
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        if self.check(input) {
            "returned".to_string()
        } else {
            "not yet".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatisticsSnapshot;
    use chrono::NaiveDate;

    fn checker(inactive_days: u32) -> InactivityChecker {
        let trophy = crate::test_support::trophy(
            "inactivity_return",
            serde_json::json!({ "inactive_days": inactive_days }),
        );
        InactivityChecker::new(&trophy).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_return_after_gap_earned() {
        let stats = StatisticsSnapshot {
            last_inactive_date: Some(date("2026-07-25")),
            last_workout_date: Some(date("2026-08-29")),
            ..Default::default()
        };
        assert!(checker(30).check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_no_workout_after_marker() {
        let stats = StatisticsSnapshot {
            last_inactive_date: Some(date("2026-07-25")),
            last_workout_date: None,
            ..Default::default()
        };
        assert!(!checker(30).check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_workout_on_marker_day_not_earned() {
        // Strictly after: a workout on the marker date itself doesn't count.
        let stats = StatisticsSnapshot {
            last_inactive_date: Some(date("2026-07-25")),
            last_workout_date: Some(date("2026-07-25")),
            ..Default::default()
        };
        assert!(!checker(30).check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_never_inactive() {
        let stats = StatisticsSnapshot {
            last_inactive_date: None,
            last_workout_date: Some(date("2026-08-29")),
            ..Default::default()
        };
        assert!(!checker(30).check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_zero_inactive_days_rejected() {
        let trophy = crate::test_support::trophy(
            "inactivity_return",
            serde_json::json!({ "inactive_days": 0 }),
        );
        assert!(InactivityChecker::new(&trophy).is_err());
    }
}
