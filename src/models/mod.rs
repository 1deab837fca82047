// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the trophy engine.

pub mod award;
pub mod stats;
pub mod trophy;
pub mod workout;

pub use award::{Award, RecordContext};
pub use stats::StatisticsSnapshot;
pub use trophy::{Trophy, TrophyType};
pub use workout::LoggedSet;
