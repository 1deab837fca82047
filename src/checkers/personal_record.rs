// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personal-record checker: earned by beating the stored one-repetition-max
//! estimate for an exercise.
//!
//! Unlike every other checker this one is driven by a single freshly logged
//! set, not the aggregate snapshot. The estimate uses Brzycki's formula
//! `1RM = w * 36 / (37 - e)` with effective reps `e = reps + RIR`.

use rust_decimal::Decimal;

use super::{binary_progress, EvaluationInput, TrophyChecker};
use crate::error::Result;
use crate::models::{LoggedSet, RecordContext, Trophy};

/// Brzycki's denominator becomes zero at 37 effective reps and negative past
/// it; estimates stop being meaningful well before that.
const MAX_EFFECTIVE_REPS: u32 = 37;

/// Decimal places kept on stored estimates.
const ESTIMATE_DECIMALS: u32 = 2;

/// Checker for "new 1RM estimate strictly beats the stored one".
pub struct PersonalRecordChecker;

impl PersonalRecordChecker {
    /// Takes no parameters; the trophy row is accepted as-is.
    pub fn new(_trophy: &Trophy) -> Result<Self> {
        Ok(Self)
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }
}

/// Estimate a one-repetition max from a logged set.
///
/// Returns `None` when the effective rep count reaches 37 or more (formula
/// undefined / negative), which callers treat as "not a record".
pub fn estimate_one_rep_max(set: &LoggedSet) -> Option<Decimal> {
    // Saturating: anything at or past 37 maps to None anyway.
    let effective_reps = set
        .repetitions
        .saturating_add(set.reps_in_reserve.unwrap_or(0));
    if effective_reps >= MAX_EFFECTIVE_REPS {
        return None;
    }
    let denominator = Decimal::from(MAX_EFFECTIVE_REPS - effective_reps);
    let estimate = set.weight * Decimal::from(36) / denominator;
    Some(estimate.round_dp(ESTIMATE_DECIMALS))
}

impl TrophyChecker for PersonalRecordChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        let Some(set) = input.set else {
            return false;
        };
        let Some(estimate) = estimate_one_rep_max(set) else {
            return false;
        };
        match input.prior_record {
            Some(prior) => estimate > prior,
            None => true,
        }
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        binary_progress(self.check(input))
    }

    fn target_display(&self) -> String {
        "beat your previous estimated 1RM".to_string()
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        match input.set.and_then(estimate_one_rep_max) {
            Some(estimate) => format!("{} estimated 1RM", estimate),
            None => "no estimate".to_string(),
        }
    }

    fn record_context(&self, input: &EvaluationInput) -> Option<RecordContext> {
        if !self.check(input) {
            return None;
        }
        let set = input.set?;
        let estimate = estimate_one_rep_max(set)?;
        Some(RecordContext {
            exercise_id: set.exercise_id,
            session_id: set.session_id,
            date: set.date,
            weight: set.weight,
            repetitions: set.repetitions,
            weight_unit: set.weight_unit.clone(),
            repetition_unit: set.repetition_unit.clone(),
            estimate,
        })
    }
}
