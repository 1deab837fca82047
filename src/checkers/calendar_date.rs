// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar-date checker: earned by working out on a specific month/day in
//! any year (e.g. a New Year's Day trophy).

use serde::Deserialize;

use super::{binary_progress, EvaluationInput, TrophyChecker};
use crate::error::{EngineError, Result};
use crate::models::Trophy;

#[derive(Debug, Deserialize)]
struct CalendarDateParams {
    /// Month, 1..=12
    month: u32,
    /// Day of month, 1..=31
    day: u32,
}

/// Checker for "any workout ever on {month}/{day}".
///
/// January 1st is answered from the precomputed snapshot flag without any
/// history lookup; every other date needs the caller-supplied
/// [`WorkoutCalendar`](super::WorkoutCalendar). No calendar means the
/// history is unknown, which reads as "not achieved".
pub struct CalendarDateChecker {
    month: u32,
    day: u32,
}

impl CalendarDateChecker {
    pub fn new(trophy: &Trophy) -> Result<Self> {
        let params: CalendarDateParams = serde_json::from_value(trophy.checker_params.clone())
            .map_err(|e| EngineError::InvalidParams(e.to_string()))?;
        if !(1..=12).contains(&params.month) {
            return Err(EngineError::InvalidParams(format!(
                "month out of range: {}",
                params.month
            )));
        }
        if !(1..=31).contains(&params.day) {
            return Err(EngineError::InvalidParams(format!(
                "day out of range: {}",
                params.day
            )));
        }
        Ok(Self {
            month: params.month,
            day: params.day,
        })
    }

    pub fn boxed(trophy: &Trophy) -> Result<Box<dyn TrophyChecker>> {
        Ok(Box::new(Self::new(trophy)?))
    }

    fn is_jan_first(&self) -> bool {
        self.month == 1 && self.day == 1
    }
}

impl TrophyChecker for CalendarDateChecker {
    fn check(&self, input: &EvaluationInput) -> bool {
        if self.is_jan_first() {
            return input.stats.worked_out_jan_1;
        }
        match input.calendar {
            Some(calendar) => calendar.worked_out_on(self.month, self.day),
            None => false,
        }
    }

    fn progress(&self, input: &EvaluationInput) -> f64 {
        binary_progress(self.check(input))
    }

    fn target_display(&self) -> String {
        format!("workout on {:02}-{:02}", self.month, self.day)
    }

    fn current_display(&self, input: &EvaluationInput) -> String {
        if self.check(input) {
            "done".to_string()
        } else {
            "not yet".to_string()
        }
    }
}
