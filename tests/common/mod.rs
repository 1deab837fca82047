// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use trophy_engine::models::{Trophy, TrophyType};
use trophy_engine::{CheckerRegistry, EngineConfig, InMemoryAwardStore, TrophyEvaluator};
use uuid::Uuid;

/// Initialize tracing once for a test binary; safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a catalog trophy for tests.
#[allow(dead_code)]
pub fn trophy(checker_key: &str, checker_params: serde_json::Value) -> Trophy {
    Trophy {
        id: Uuid::new_v4(),
        name: format!("Test Trophy ({checker_key})"),
        description: String::new(),
        trophy_type: TrophyType::Other,
        checker_key: checker_key.to_string(),
        checker_params,
        hidden: false,
        progressive: false,
        active: true,
        display_order: 0,
    }
}

/// Evaluator with built-in checkers, default config and a fresh in-memory
/// store. Returns the store too so tests can inspect what was written.
#[allow(dead_code)]
pub fn test_evaluator() -> (TrophyEvaluator, Arc<InMemoryAwardStore>) {
    let store = Arc::new(InMemoryAwardStore::new());
    let evaluator = TrophyEvaluator::new(
        CheckerRegistry::with_builtins(),
        store.clone(),
        EngineConfig::default(),
    );
    (evaluator, store)
}
