//! Per-user workout statistics snapshot.
//!
//! These aggregates are pre-computed by the workout processing pipeline as
//! activities are logged. The trophy engine consumes them as a read-only
//! snapshot; streak resets, weekend counting and inactivity detection all
//! happen upstream.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only statistics snapshot for a single user.
///
/// All counters are monotonically non-decreasing except the streak counters,
/// which the upstream pipeline resets to zero on a missed interval. A snapshot
/// may be slightly stale relative to concurrent workout writes; checkers
/// tolerate that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    // ─── Totals ──────────────────────────────────────────────────
    /// Total completed workouts
    #[serde(default)]
    pub total_workouts: u32,
    /// Cumulative weight lifted (kilograms, exact)
    #[serde(default)]
    pub total_weight_kg: Decimal,

    // ─── Streaks ─────────────────────────────────────────────────
    /// Current consecutive-day streak (days)
    #[serde(default)]
    pub current_streak_days: u32,
    /// Longest consecutive-day streak ever (days)
    #[serde(default)]
    pub longest_streak_days: u32,
    /// Consecutive weekends with both a Saturday and a Sunday session
    #[serde(default)]
    pub weekend_streak: u32,

    // ─── Time of day ─────────────────────────────────────────────
    /// Earliest workout start time ever observed
    #[serde(default)]
    pub earliest_workout_time: Option<NaiveTime>,
    /// Latest workout start time ever observed
    #[serde(default)]
    pub latest_workout_time: Option<NaiveTime>,

    // ─── Calendar ────────────────────────────────────────────────
    /// Whether the user has ever worked out on January 1st
    #[serde(default)]
    pub worked_out_jan_1: bool,
    /// Most recent workout date
    #[serde(default)]
    pub last_workout_date: Option<NaiveDate>,
    /// Date the user was last detected inactive (set upstream once the
    /// configured gap has elapsed)
    #[serde(default)]
    pub last_inactive_date: Option<NaiveDate>,

    // ─── Metadata ────────────────────────────────────────────────
    /// Last update timestamp (ISO 8601)
    #[serde(default)]
    pub updated_at: String,
}

impl StatisticsSnapshot {
    /// Best consecutive-day streak, whichever of current/longest is larger.
    ///
    /// The pipeline normally keeps `longest >= current`, but a snapshot taken
    /// mid-update may not, so take the max.
    pub fn best_streak_days(&self) -> u32 {
        self.current_streak_days.max(self.longest_streak_days)
    }
}
