// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Award model: the record that a user has earned (or is working toward) a
//! trophy.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Award record, at most one per (user, trophy) pair.
///
/// Progressive trophies may hold an unearned row (`earned_at` is `None`)
/// whose `progress` gets refreshed by re-evaluation. Once `earned_at` is set
/// the row is terminal and never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    /// Owning user ID
    pub user_id: u64,
    /// Trophy that was (or is being) earned
    pub trophy_id: Uuid,
    /// When the trophy was earned; None while only progress is tracked
    pub earned_at: Option<DateTime<Utc>>,
    /// Progress toward earning, 0..=100
    pub progress: f64,
    /// Whether the user has been shown this award
    #[serde(default)]
    pub notified: bool,
    /// Personal-record context, present only for record awards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordContext>,
}

impl Award {
    /// An earned award at full progress.
    pub fn earned(
        user_id: u64,
        trophy_id: Uuid,
        earned_at: DateTime<Utc>,
        record: Option<RecordContext>,
    ) -> Self {
        Self {
            user_id,
            trophy_id,
            earned_at: Some(earned_at),
            progress: 100.0,
            notified: false,
            record,
        }
    }

    /// An unearned row tracking partial progress.
    pub fn pending(user_id: u64, trophy_id: Uuid, progress: f64) -> Self {
        Self {
            user_id,
            trophy_id,
            earned_at: None,
            progress,
            notified: false,
            record: None,
        }
    }

    pub fn is_earned(&self) -> bool {
        self.earned_at.is_some()
    }
}

/// Context payload persisted with a personal-record award, kept for comparing
/// future estimates against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordContext {
    /// Exercise the record was set on
    pub exercise_id: u64,
    /// Session the record set belongs to
    pub session_id: u64,
    /// Date of the record set
    pub date: NaiveDate,
    /// Raw weight of the set, in `weight_unit`
    pub weight: Decimal,
    /// Raw repetitions of the set
    pub repetitions: u32,
    /// Weight unit (e.g. "kg")
    pub weight_unit: String,
    /// Repetition unit (e.g. "reps")
    pub repetition_unit: String,
    /// Estimated one-repetition max (Brzycki, 2 decimal places)
    pub estimate: Decimal,
}
