// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Checker registry: maps the `checker_key` stored on a trophy to a checker
//! constructor.
//!
//! The registry is an explicit, constructible object rather than ambient
//! global state, so tests can register fakes and applications can decide
//! exactly which checkers exist. New trophy kinds plug in here without the
//! orchestrator changing.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    calendar_date::CalendarDateChecker, count::CountChecker, inactivity::InactivityChecker,
    personal_record::PersonalRecordChecker, streak::StreakChecker, time_of_day::TimeOfDayChecker,
    volume::VolumeChecker, weekend::WeekendChecker, TrophyChecker,
};
use crate::error::Result;
use crate::models::Trophy;

/// Constructor for one checker kind. The trait bound is what guarantees a
/// registered constructor satisfies the checker contract.
pub type CheckerCtor =
    Arc<dyn Fn(&Trophy) -> Result<Box<dyn TrophyChecker>> + Send + Sync>;

/// String-keyed registry of checker constructors.
pub struct CheckerRegistry {
    ctors: HashMap<String, CheckerCtor>,
}

impl CheckerRegistry {
    /// An empty registry with no checkers at all.
    pub fn new() -> Self {
        Self {
            ctors: HashMap::new(),
        }
    }

    /// A registry pre-populated with the eight built-in checkers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("count", Arc::new(CountChecker::boxed));
        registry.register("streak", Arc::new(StreakChecker::boxed));
        registry.register("weekend", Arc::new(WeekendChecker::boxed));
        registry.register("volume", Arc::new(VolumeChecker::boxed));
        registry.register("time_of_day", Arc::new(TimeOfDayChecker::boxed));
        registry.register("calendar_date", Arc::new(CalendarDateChecker::boxed));
        registry.register("inactivity_return", Arc::new(InactivityChecker::boxed));
        registry.register("personal_record", Arc::new(PersonalRecordChecker::boxed));
        registry
    }

    /// Register a constructor under a key, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, ctor: CheckerCtor) {
        self.ctors.insert(key.into(), ctor);
    }

    /// Remove a key, returning its constructor if it was present.
    pub fn unregister(&mut self, key: &str) -> Option<CheckerCtor> {
        self.ctors.remove(key)
    }

    /// Look up a constructor by key.
    pub fn get(&self, key: &str) -> Option<&CheckerCtor> {
        self.ctors.get(key)
    }

    /// Build a checker for a trophy.
    ///
    /// Never panics: an unknown key or a constructor failure (typically bad
    /// params) is logged as a warning and yields `None`, which the
    /// orchestrator treats as "skip this trophy for this user".
    pub fn create(&self, trophy: &Trophy) -> Option<Box<dyn TrophyChecker>> {
        let Some(ctor) = self.ctors.get(&trophy.checker_key) else {
            tracing::warn!(
                trophy_id = %trophy.id,
                checker_key = %trophy.checker_key,
                "Unknown checker key, skipping trophy"
            );
            return None;
        };
        match ctor(trophy) {
            Ok(checker) => Some(checker),
            Err(e) => {
                tracing::warn!(
                    trophy_id = %trophy.id,
                    checker_key = %trophy.checker_key,
                    error = %e,
                    "Checker construction failed, skipping trophy"
                );
                None
            }
        }
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keys_present() {
        let registry = CheckerRegistry::with_builtins();
        for key in [
            "count",
            "streak",
            "weekend",
            "volume",
            "time_of_day",
            "calendar_date",
            "inactivity_return",
            "personal_record",
        ] {
            assert!(registry.get(key).is_some(), "missing builtin: {key}");
        }
    }

    #[test]
    fn test_create_unknown_key_returns_none() {
        let registry = CheckerRegistry::with_builtins();
        let trophy = crate::test_support::trophy("no_such_checker", serde_json::json!({}));
        assert!(registry.create(&trophy).is_none());
    }

    #[test]
    fn test_create_with_bad_params_returns_none() {
        let registry = CheckerRegistry::with_builtins();
        let trophy = crate::test_support::trophy("count", serde_json::json!({ "count": "ten" }));
        assert!(registry.create(&trophy).is_none());
    }

    #[test]
    fn test_create_builds_checker() {
        let registry = CheckerRegistry::with_builtins();
        let trophy = crate::test_support::trophy("count", serde_json::json!({ "count": 10 }));
        assert!(registry.create(&trophy).is_some());
    }

    #[test]
    fn test_unregister_removes_key() {
        let mut registry = CheckerRegistry::with_builtins();
        assert!(registry.unregister("count").is_some());
        assert!(registry.get("count").is_none());
        assert!(registry.unregister("count").is_none());
    }
}
