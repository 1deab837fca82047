// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak checker: earned after a run of consecutive workout days.

use serde::Deserialize;

use super::{ratio_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;

#[derive(Debug, Deserialize)]
struct StreakParams {
    /// Required consecutive days, must be positive
    days: u32,
}

/// Checker for `max(current_streak, longest_streak) >= days`.
///
/// The longest streak counts too: a user who once held a 30-day streak keeps
/// the 30-day trophy even after the streak breaks.
pub struct StreakChecker {
    days: u32,
}

impl StreakChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: StreakParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;
        if params.days == 0 {
            return Err(EngineError::InvalidParams(
                "days must be positive".to_string(),
            ));
        }
        Ok(Self { days: params.days })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

impl TrophyChecker for StreakChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        input.stats.best_streak_days() >= self.days
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        ratio_progress(
            f64::from(input.stats.best_streak_days()),
            f64::from(self.days),
        )
    }

    fn target_display(&self) -> String {
        format!("{} days", self.days)
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        format!("{} days", input.stats.best_streak_days())
    }
}
