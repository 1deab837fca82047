// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trophy catalog model.
//!
//! Trophies are created and edited by administrators elsewhere; this engine
//! only ever reads them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Informational classification of a trophy.
///
/// Display/grouping only; dispatch always goes through `checker_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrophyType {
    Time,
    Volume,
    Count,
    Sequence,
    Date,
    Other,
}

/// A trophy definition from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trophy {
    /// Catalog ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Description shown to the user
    pub description: String,
    /// Informational type tag
    pub trophy_type: TrophyType,
    /// Key resolved through the checker registry
    pub checker_key: String,
    /// Checker-specific parameters (shape depends on `checker_key`)
    #[serde(default)]
    pub checker_params: serde_json::Value,
    /// Hidden from the user until earned
    #[serde(default)]
    pub hidden: bool,
    /// Show partial progress toward earning
    #[serde(default)]
    pub progressive: bool,
    /// Eligible for evaluation
    #[serde(default = "default_active")]
    pub active: bool,
    /// Sort order in listings
    #[serde(default)]
    pub display_order: u32,
}

fn default_active() -> bool {
    true
}
