// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Award storage layer.
//!
//! The surrounding application brings its own database; the engine only
//! needs this narrow contract, and only the orchestrator is meant to call
//! the write side of it.

pub mod memory;

pub use memory::InMemoryAwardStore;

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Award, RecordContext};

/// Outcome of attempting to mark a trophy earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarnOutcome {
    /// The award row was created (or an unearned progress row promoted).
    Created,
    /// An earned row already existed; nothing was written.
    AlreadyEarned,
}

/// Storage contract for awards and personal-record estimates.
///
/// Implementations must enforce uniqueness on (user, trophy): two concurrent
/// `mark_earned` calls for the same pair must resolve to exactly one
/// `Created` and the rest `AlreadyEarned`, never an error and never two rows.
#[async_trait]
pub trait AwardStore: Send + Sync {
    /// Fetch the award row for a (user, trophy) pair, earned or not.
    async fn get_award(&self, user_id: u64, trophy_id: Uuid) -> Result<Option<Award>>;

    /// Insert-if-absent keyed on (user, trophy). An unearned progress row is
    /// promoted in place; an already-earned row is left untouched.
    async fn mark_earned(&self, award: &Award) -> Result<EarnOutcome>;

    /// Refresh the progress value on an unearned row, creating it if absent.
    /// Earned rows are terminal: the call is a silent no-op for them.
    async fn update_progress(&self, user_id: u64, trophy_id: Uuid, progress: f64) -> Result<()>;

    /// Most recent stored 1RM estimate for a (user, exercise) pair.
    async fn latest_record(&self, user_id: u64, exercise_id: u64)
        -> Result<Option<RecordContext>>;

    /// Store a new personal-record context for future comparisons.
    async fn save_record(
        &self,
        user_id: u64,
        exercise_id: u64,
        record: &RecordContext,
    ) -> Result<()>;
}

/// Convenience: just the estimate from the latest record, if any.
pub async fn latest_estimate(
    store: &dyn AwardStore,
    user_id: u64,
    exercise_id: u64,
) -> Result<Option<Decimal>> {
    Ok(store
        .latest_record(user_id, exercise_id)
        .await?
        .map(|r| r.estimate))
}
