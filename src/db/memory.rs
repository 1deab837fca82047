// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory award store.
//!
//! Reference implementation of the [`AwardStore`] contract, used in tests and
//! small deployments. Entry-level locking via dashmap gives the same
//! "exactly one winner" behavior a database uniqueness constraint provides.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use super::{AwardStore, EarnOutcome};
use crate::error::Result;
use crate::models::{Award, RecordContext};

#[derive(Default)]
pub struct InMemoryAwardStore {
    awards: DashMap<(u64, Uuid), Award>,
    records: DashMap<(u64, u64), RecordContext>,
}

impl InMemoryAwardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of award rows held (earned or pending). Test helper.
    pub fn award_count(&self) -> usize {
        self.awards.len()
    }
}

#[async_trait]
impl AwardStore for InMemoryAwardStore {
    async fn get_award(&self, user_id: u64, trophy_id: Uuid) -> Result<Option<Award>> {
        Ok(self.awards.get(&(user_id, trophy_id)).map(|a| a.clone()))
    }

    async fn mark_earned(&self, award: &Award) -> Result<EarnOutcome> {
        match self.awards.entry((award.user_id, award.trophy_id)) {
            Entry::Occupied(mut entry) => {
                if entry.get().is_earned() {
                    return Ok(EarnOutcome::AlreadyEarned);
                }
                // Promote the pending progress row.
                entry.insert(award.clone());
                Ok(EarnOutcome::Created)
            }
            Entry::Vacant(entry) => {
                entry.insert(award.clone());
                Ok(EarnOutcome::Created)
            }
        }
    }

    async fn update_progress(&self, user_id: u64, trophy_id: Uuid, progress: f64) -> Result<()> {
        match self.awards.entry((user_id, trophy_id)) {
            Entry::Occupied(mut entry) => {
                // Earned rows are terminal.
                if !entry.get().is_earned() {
                    entry.get_mut().progress = progress;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(Award::pending(user_id, trophy_id, progress));
            }
        }
        Ok(())
    }

    async fn latest_record(
        &self,
        user_id: u64,
        exercise_id: u64,
    ) -> Result<Option<RecordContext>> {
        Ok(self
            .records
            .get(&(user_id, exercise_id))
            .map(|r| r.clone()))
    }

    async fn save_record(
        &self,
        user_id: u64,
        exercise_id: u64,
        record: &RecordContext,
    ) -> Result<()> {
        self.records.insert((user_id, exercise_id), record.clone());
        Ok(())
    }
}
