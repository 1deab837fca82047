// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Volume checker: earned after a cumulative amount of weight lifted.
//!
//! The threshold comparison is done in exact decimal arithmetic so a user
//! sitting exactly on the target never flaps between earned and unearned the
//! way a binary float comparison could. Only the display-only progress
//! percentage drops to f64.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{ratio_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;

#[derive(Debug, Deserialize)]
struct VolumeParams {
    /// Required cumulative kilograms, must be positive
    kg: Decimal,
}

/// Checker for `total_weight_kg >= kg`.
pub struct VolumeChecker {
    kg: Decimal,
}

impl VolumeChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: VolumeParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;
        if params.kg <= Decimal::ZERO {
            return Err(EngineError::InvalidParams(
                "kg must be positive".to_string(),
            ));
        }
        Ok(Self { kg: params.kg })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

impl TrophyChecker for VolumeChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        input.stats.total_weight_kg >= self.kg
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        let lifted = input.stats.total_weight_kg.to_f64().unwrap_or(0.0);
        let target = self.kg.to_f64().unwrap_or(0.0);
        ratio_progress(lifted, target)
    }

    fn target_display(&self) -> String {
        format!("{} kg", self.kg)
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        format!("{} kg", input.stats.total_weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatisticsSnapshot;
    use rust_decimal_macros::dec;

    fn checker(kg: Decimal) -> VolumeChecker {
        let trophy = crate::test_support::trophy("volume", serde_json::json!({ "kg": kg }));
        VolumeChecker::new(&trophy).unwrap()
    }

    fn stats(lifted: Decimal) -> StatisticsSnapshot {
        StatisticsSnapshot {
            total_weight_kg: lifted,
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_threshold_is_earned() {
        let stats = stats(dec!(10000));
        assert!(checker(dec!(10000)).check(&EvaluationInput::from_stats(&stats)));
    }

    #[test]
    fn test_just_below_threshold_is_not_earned() {
        // 0.01 kg short must stay unearned; exact decimals make this reliable.
        let stats = stats(dec!(9999.99));
        let input = EvaluationInput::from_stats(&stats);
        assert!(!checker(dec!(10000)).check(&input));
        assert!(checker(dec!(10000)).progress(&input) < 100.0);
    }

    #[test]
    fn test_progress_halfway() {
        let stats = stats(dec!(5000));
        assert_eq!(
            checker(dec!(10000)).progress(&EvaluationInput::from_stats(&stats)),
            50.0
        );
    }

    #[test]
    fn test_nonpositive_kg_rejected() {
        let trophy = crate::test_support::trophy("volume", serde_json::json!({ "kg": 0 }));
        assert!(VolumeChecker::new(&trophy).is_err());
        let trophy = crate::test_support::trophy("volume", serde_json::json!({ "kg": -5 }));
        assert!(VolumeChecker::new(&trophy).is_err());
    }
}
