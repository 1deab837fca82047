// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekend-pairing checker: earned after consecutive weekends with both a
//! Saturday and a Sunday session.

use serde::Deserialize;

use super::{ratio_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;

#[derive(Debug, Deserialize)]
struct WeekendParams {
    /// Required consecutive full weekends, must be positive
    weekends: u32,
}

/// Checker for `weekend_streak >= weekends`.
pub struct WeekendChecker {
    weekends: u32,
}

impl WeekendChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: WeekendParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;
        if params.weekends == 0 {
            return Err(EngineError::InvalidParams(
                "weekends must be positive".to_string(),
            ));
        }
        Ok(Self {
            weekends: params.weekends,
        })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

impl TrophyChecker for WeekendChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        input.stats.weekend_streak >= self.weekends
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        ratio_progress(
            f64::from(input.stats.weekend_streak),
            f64::from(self.weekends),
        )
    }

    fn target_display(&self) -> String {
        format!("{} weekends", self.weekends)
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        format!("{} weekends", input.stats.weekend_streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatisticsSnapshot;

    fn checker(weekends: u32) -> WeekendChecker {
        let trophy =
            crate::test_support::trophy("weekend", serde_json::json!({ "weekends": weekends }));
        WeekendChecker::new(&trophy).unwrap()
    }

    #[test]
    fn test_achieved_at_threshold() {
        let stats = StatisticsSnapshot {
            weekend_streak: 4,
            ..Default::default()
        };
        let input = EvaluationInput::from_stats(&stats);
        assert!(checker(4).check(&input));
        assert_eq!(checker(4).progress(&input), 100.0);
    }

    #[test]
    fn test_partial_progress() {
        let stats = StatisticsSnapshot {
            weekend_streak: 1,
            ..Default::default()
        };
        let input = EvaluationInput::from_stats(&stats);
        assert!(!checker(4).check(&input));
        assert_eq!(checker(4).progress(&input), 25.0);
    }

    #[test]
    fn test_zero_weekends_rejected() {
        let trophy = crate::test_support::trophy("weekend", serde_json::json!({ "weekends": 0 }));
        assert!(WeekendChecker::new(&trophy).is_err());
    }
}
