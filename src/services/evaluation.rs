// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trophy evaluation orchestrator.
//!
//! Handles the core workflow:
//! 1. Resolve the trophy's checker through the registry
//! 2. Materialize the evaluation input (snapshot, event, prior record)
//! 3. Run the checker
//! 4. Persist the award exactly once (or refresh progress)
//!
//! Safe to call repeatedly and concurrently for the same (user, trophy):
//! the store's uniqueness on that pair is the idempotence guard.

use std::sync::Arc;

use crate::checkers::{CheckerRegistry, EvaluationInput, WorkoutCalendar};
use crate::config::EngineConfig;
use crate::db::{latest_estimate, AwardStore, EarnOutcome};
use crate::error::Result;
use crate::models::{Award, LoggedSet, StatisticsSnapshot, Trophy};
use uuid::Uuid;

/// What a single evaluation did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvaluationOutcome {
    /// The user already holds this trophy; nothing was written.
    AlreadyEarned,
    /// The award was created by this call.
    NewlyEarned,
    /// Not achieved yet; progress may have been refreshed.
    StillPending { progress: f64 },
    /// No usable checker for this trophy (unknown key or bad params), or the
    /// trophy is inactive.
    Skipped,
}

/// Evaluates trophies for users and persists awards.
///
/// The only component allowed to write through the [`AwardStore`].
pub struct TrophyEvaluator {
    registry: CheckerRegistry,
    store: Arc<dyn AwardStore>,
    config: EngineConfig,
}

impl TrophyEvaluator {
    pub fn new(registry: CheckerRegistry, store: Arc<dyn AwardStore>, config: EngineConfig) -> Self {
        Self {
            registry,
            store,
            config,
        }
    }

    /// Evaluate one trophy for one user.
    ///
    /// `set` is the freshly logged set for event-triggered evaluation
    /// (personal records); `calendar` is the optional workout-history lookup
    /// for calendar-date trophies. Store I/O failures propagate; every rule
    /// and configuration problem maps to an outcome instead.
    pub async fn evaluate(
        &self,
        user_id: u64,
        trophy: &Trophy,
        stats: &StatisticsSnapshot,
        set: Option<&LoggedSet>,
        calendar: Option<&dyn WorkoutCalendar>,
    ) -> Result<EvaluationOutcome> {
        if !trophy.active {
            tracing::debug!(user_id, trophy_id = %trophy.id, "Trophy inactive, skipping");
            return Ok(EvaluationOutcome::Skipped);
        }

        // 1. An earned award is terminal, but an event-carrying evaluation
        //    must still run its checker so the record ledger keeps moving.
        let existing = self.store.get_award(user_id, trophy.id).await?;
        let already_earned = existing.as_ref().is_some_and(Award::is_earned);
        if already_earned && set.is_none() {
            tracing::debug!(
                user_id,
                trophy_id = %trophy.id,
                "Trophy already earned (idempotent skip)"
            );
            return Ok(EvaluationOutcome::AlreadyEarned);
        }

        // 2. Resolve the checker; unknown keys and bad params were already
        //    logged by the registry.
        let Some(checker) = self.registry.create(trophy) else {
            return Ok(EvaluationOutcome::Skipped);
        };

        // 3. Materialize the input so the checker stays pure.
        let prior_record = match set {
            Some(set) => latest_estimate(self.store.as_ref(), user_id, set.exercise_id).await?,
            None => None,
        };
        let input = EvaluationInput {
            stats,
            set,
            prior_record,
            calendar,
        };

        // 4. Run the rule.
        if !checker.check(&input) {
            if already_earned {
                return Ok(EvaluationOutcome::AlreadyEarned);
            }
            let progress = checker.progress(&input);
            if self.should_refresh(trophy, existing.as_ref(), progress) {
                self.store
                    .update_progress(user_id, trophy.id, progress)
                    .await?;
            }
            return Ok(EvaluationOutcome::StillPending { progress });
        }

        // 5. Keep the personal-record ledger current even when the trophy
        //    itself is already earned: future comparisons need the best
        //    estimate.
        let record = checker.record_context(&input);
        if let (Some(record), Some(set)) = (record.as_ref(), set) {
            self.store
                .save_record(user_id, set.exercise_id, record)
                .await?;
        }
        if already_earned {
            tracing::debug!(
                user_id,
                trophy_id = %trophy.id,
                "Trophy already earned, record ledger refreshed"
            );
            return Ok(EvaluationOutcome::AlreadyEarned);
        }

        // 6. Persist the award; a concurrent earn resolves to AlreadyEarned.
        let award = Award::earned(user_id, trophy.id, chrono::Utc::now(), record);
        match self.store.mark_earned(&award).await? {
            EarnOutcome::Created => {
                tracing::info!(
                    user_id,
                    trophy_id = %trophy.id,
                    trophy_name = %trophy.name,
                    "Trophy earned"
                );
                Ok(EvaluationOutcome::NewlyEarned)
            }
            EarnOutcome::AlreadyEarned => {
                tracing::debug!(
                    user_id,
                    trophy_id = %trophy.id,
                    "Lost earn race, trophy already earned"
                );
                Ok(EvaluationOutcome::AlreadyEarned)
            }
        }
    }

    /// Batch sweep over a trophy list, e.g. from a periodic job.
    ///
    /// Logged-set events go through individual [`evaluate`](Self::evaluate)
    /// calls instead; a sweep has no single triggering set.
    pub async fn evaluate_all(
        &self,
        user_id: u64,
        trophies: &[Trophy],
        stats: &StatisticsSnapshot,
        calendar: Option<&dyn WorkoutCalendar>,
    ) -> Result<Vec<(Uuid, EvaluationOutcome)>> {
        let mut outcomes = Vec::with_capacity(trophies.len());
        for trophy in trophies {
            let outcome = self
                .evaluate(user_id, trophy, stats, None, calendar)
                .await?;
            outcomes.push((trophy.id, outcome));
        }
        Ok(outcomes)
    }

    /// Whether a still-pending progress value should be written back.
    fn should_refresh(&self, trophy: &Trophy, existing: Option<&Award>, progress: f64) -> bool {
        if !trophy.progressive || !self.config.refresh_progress {
            return false;
        }
        match existing {
            Some(award) => (progress - award.progress).abs() >= self.config.min_progress_delta,
            // First progress row: only worth creating once there is progress.
            None => progress > 0.0,
        }
    }
}
