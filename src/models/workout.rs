// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged-set event model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single logged strength-training set.
///
/// This is the event input for personal-record evaluation; every other
/// checker works purely from the statistics snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedSet {
    /// Owning user ID
    pub user_id: u64,
    /// Exercise performed
    pub exercise_id: u64,
    /// Workout session this set belongs to
    pub session_id: u64,
    /// Date the set was performed
    pub date: NaiveDate,
    /// Weight moved, in `weight_unit`
    pub weight: Decimal,
    /// Repetitions performed
    pub repetitions: u32,
    /// Self-reported reps in reserve (None means not reported)
    pub reps_in_reserve: Option<u32>,
    /// Weight unit (e.g. "kg", "lb")
    pub weight_unit: String,
    /// Repetition unit (e.g. "reps", "seconds")
    pub repetition_unit: String,
}
