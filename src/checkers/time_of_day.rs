// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Time-of-day checker: earned by working out before or after a wall-clock
//! boundary ("early bird" / "night owl" trophies).

use chrono::NaiveTime;
use serde::Deserialize;

use super::{binary_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;
use crate::time_utils::parse_hhmm;

#[derive(Debug, Deserialize)]
struct TimeOfDayParams {
    /// Earliest workout must start before this time ("HH:MM")
    #[serde(default)]
    before: Option<String>,
    /// Latest workout must start after this time ("HH:MM")
    #[serde(default)]
    after: Option<String>,
}

/// Checker for `earliest < before` OR `latest > after`.
///
/// At least one boundary is required; when both are set, either one
/// satisfies the rule.
pub struct TimeOfDayChecker {
    before: Option<NaiveTime>,
    after: Option<NaiveTime>,
}

impl TimeOfDayChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: TimeOfDayParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;

        let before = params
            .before
            .as_deref()
            .map(|s| {
                parse_hhmm(s)
                    .ok_or_else(|| EngineError::InvalidParams(format!("bad before time: {s}")))
            })
            .transpose()?;
        let after = params
            .after
            .as_deref()
            .map(|s| {
                parse_hhmm(s)
                    .ok_or_else(|| EngineError::InvalidParams(format!("bad after time: {s}")))
            })
            .transpose()?;

        if before.is_none() && after.is_none() {
            return Err(EngineError::InvalidParams(
                "at least one of before/after is required".to_string(),
            ));
        }
        Ok(Self { before, after })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

impl TrophyChecker for TimeOfDayChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        // A user with no workouts has no time extremes; each arm is simply
        // false until its statistic exists.
        let before_ok = match (self.before, input.stats.earliest_workout_time) {
            (Some(boundary), Some(earliest)) => earliest < boundary,
            _ => false,
        };
        let after_ok = match (self.after, input.stats.latest_workout_time) {
            (Some(boundary), Some(latest)) => latest > boundary,
            _ => false,
        };
        before_ok || after_ok
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        binary_progress(self.check(input))
    }

    fn target_display(&self) -> String {
        match (self.before, self.after) {
            (Some(b), Some(a)) => format!("before {} or after {}", b.format("%H:%M"), a.format("%H:%M")),
            (Some(b), None) => format!("before {}", b.format("%H:%M")),
            (None, Some(a)) => format!("after {}", a.format("%H:%M")),
            (None, None) => String::new(),
        }
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        let fmt = |t: Option<NaiveTime>| match t {
            Some(t) => t.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        };
        format!(
            "earliest {}, latest {}",
            fmt(input.stats.earliest_workout_time),
            fmt(input.stats.latest_workout_time)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatisticsSnapshot;

    fn checker(params: serde_json::Value) -> TimeOfDayChecker {
        let trophy = crate::test_support::trophy("time_of_day", params);
        TimeOfDayChecker::new(&trophy).unwrap()
    }

    fn stats(earliest: Option<&str>, latest: Option<&str>) -> StatisticsSnapshot {
        StatisticsSnapshot {
            earliest_workout_time: earliest.and_then(parse_hhmm),
            latest_workout_time: latest.and_then(parse_hhmm),
            ..Default::default()
        }
    }

    #[test]
    fn test_early_bird_earned() {
        let checker = checker(serde_json::json!({ "before": "06:00" }));
        let stats = stats(Some("05:30"), Some("18:00"));
        let input = EvaluationInput::from_stats(&stats);
        assert!(checker.check(&input));
        assert_eq!(checker.progress(&input), 100.0);
    }

    #[test]
    fn test_early_bird_not_earned() {
        let checker = checker(serde_json::json!({ "before": "06:00" }));
        let stats = stats(Some("07:00"), Some("18:00"));
        assert!(!checker.check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_exact_boundary_not_earned() {
        // Strict comparison: 06:00 is not before 06:00.
        let checker = checker(serde_json::json!({ "before": "06:00" }));
        let stats = stats(Some("06:00"), None);
        assert!(!checker.check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_night_owl_earned() {
        let checker = checker(serde_json::json!({ "after": "22:00" }));
        let stats = stats(Some("09:00"), Some("23:15"));
        assert!(checker.check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_either_boundary_satisfies() {
        let checker = checker(serde_json::json!({ "before": "06:00", "after": "22:00" }));
        let stats = stats(Some("09:00"), Some("23:00"));
        assert!(checker.check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_no_workouts_yet() {
        let checker = checker(serde_json::json!({ "before": "06:00" }));
        let stats = stats(None, None);
        assert!(!checker.check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_requires_at_least_one_boundary() {
        let trophy = crate::test_support::trophy("time_of_day", serde_json::json!({}));
        assert!(TimeOfDayChecker::new(&trophy).is_err());
    }

    #[test]
    fn test_malformed_time_rejected() {
        let trophy =
            crate::test_support::trophy("time_of_day", serde_json::json!({ "before": "6am" }));
        assert!(TimeOfDayChecker::new(&trophy).is_err());
    }
}
