// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Checker contract and the built-in rule implementations.
//!
//! A checker is a pure strategy: constructed once from a trophy definition
//! (typed parameters are decoded and validated at construction, so a built
//! checker always has valid params), then evaluated against an
//! [`EvaluationInput`]. Checkers never touch storage and never panic on
//! missing inputs; an absent statistic simply means "not achieved".

pub mod calendar_date;
pub mod count;
pub mod inactivity;
pub mod personal_record;
pub mod registry;
pub mod streak;
pub mod time_of_day;
pub mod volume;
pub mod weekend;

pub use registry::{CheckerCtor, CheckerRegistry};

use crate::models::{LoggedSet, RecordContext, StatisticsSnapshot};
use rust_decimal::Decimal;

/// Read-only lookup into a user's workout history by calendar date.
///
/// Supplied by the surrounding application; only the calendar-date checker
/// uses it, and only for dates other than January 1st (which has a
/// precomputed flag on the snapshot). `Send + Sync` so evaluation futures
/// holding a `&dyn WorkoutCalendar` can be spawned onto a runtime.
pub trait WorkoutCalendar: Send + Sync {
    /// Whether the user ever worked out on the given month/day, any year.
    fn worked_out_on(&self, month: u32, day: u32) -> bool;
}

/// Everything a checker may read during one evaluation.
///
/// The orchestrator materializes this up front so checkers stay pure
/// functions of their inputs.
pub struct EvaluationInput<'a> {
    /// The user's statistics snapshot
    pub stats: &'a StatisticsSnapshot,
    /// Freshly logged set, present only for event-triggered evaluation
    pub set: Option<&'a LoggedSet>,
    /// Latest stored 1RM estimate for the logged set's exercise
    pub prior_record: Option<Decimal>,
    /// Workout history lookup, if the caller can provide one
    pub calendar: Option<&'a dyn WorkoutCalendar>,
}

impl<'a> EvaluationInput<'a> {
    /// Input with only a statistics snapshot; sufficient for every checker
    /// except personal-record and (non-Jan-1) calendar-date.
    pub fn from_stats(stats: &'a StatisticsSnapshot) -> Self {
        Self {
            stats,
            set: None,
            prior_record: None,
            calendar: None,
        }
    }
}

/// One trophy rule evaluation strategy.
///
/// Implementations must not panic from any method; invalid or missing input
/// reads as "not achieved".
pub trait TrophyChecker: Send + Sync {
    /// Whether the rule is currently satisfied.
    fn check(&self, input: &EvaluationInput) -> bool;

    /// Progress toward the rule, always within 0..=100. Graduated rules
    /// report `min(100, 100 * current / target)`; binary rules report
    /// 100 or 0.
    fn progress(&self, input: &EvaluationInput) -> f64;

    /// The rule's threshold, rendered in checker-specific units.
    fn target_display(&self) -> String;

    /// The user's current measurement, rendered in the same units.
    fn current_display(&self, input: &EvaluationInput) -> String;

    /// Human-readable progress line.
    fn progress_display(&self, input: &EvaluationInput) -> String {
        format!(
            "{} / {}",
            self.current_display(input),
            self.target_display()
        )
    }

    /// Personal-record context when this evaluation established a new record.
    /// Only the personal-record checker returns `Some`.
    fn record_context(&self, _input: &EvaluationInput) -> Option<RecordContext> {
        None
    }
}

/// Graduated progress: `min(100, 100 * current / target)`, guarding a
/// non-positive target.
pub(crate) fn ratio_progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (100.0 * current / target).min(100.0)
}

/// Binary progress: all or nothing.
pub(crate) fn binary_progress(achieved: bool) -> f64 {
    if achieved {
        100.0
    } else {
        0.0
    }
}
