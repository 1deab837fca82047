// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trophy evaluation engine.
//!
//! Decides, from a user's rolling workout statistics (and for personal
//! records, a single logged set), whether a named trophy has been earned and
//! how close the user is to earning it. Rules are pluggable strategies
//! resolved through a string-keyed registry; awards are persisted exactly
//! once per (user, trophy) pair.
//!
//! The surrounding application owns the trophy catalog, the statistics
//! pipeline and the real database; this crate only consumes their read
//! interfaces and writes through the [`db::AwardStore`] contract.

pub mod checkers;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use checkers::{CheckerRegistry, EvaluationInput, TrophyChecker, WorkoutCalendar};
pub use config::EngineConfig;
pub use db::{AwardStore, EarnOutcome, InMemoryAwardStore};
pub use error::{EngineError, Result};
pub use services::{EvaluationOutcome, TrophyEvaluator};
