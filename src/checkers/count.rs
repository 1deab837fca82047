// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Count-based checker: earned after a total number of completed workouts.

use serde::Deserialize;

use super::{ratio_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;

#[derive(Debug, Deserialize)]
struct CountParams {
    /// Required total workouts, must be positive
    count: u32,
}

/// Checker for `total_workouts >= count`.
pub struct CountChecker {
    count: u32,
}

impl CountChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: CountParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;
        if params.count == 0 {
            return Err(EngineError::InvalidParams(
                "count must be positive".to_string(),
            ));
        }
        Ok(Self {
            count: params.count,
        })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

impl TrophyChecker for CountChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        input.stats.total_workouts >= self.count
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        ratio_progress(f64::from(input.stats.total_workouts), f64::from(self.count))
    }

    fn target_display(&self) -> String {
        format!("{} workouts", self.count)
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        format!("{} workouts", input.stats.total_workouts)
    }
}
