// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Loads the sample church snapshot and builds in-memory stores over it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;
use std::sync::Arc;

use worship_planner::permissions::RoleResolver;
use worship_planner::store::{MemoryStore, Snapshot};

/// Path of the sample snapshot shipped with the tests
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/grace_church.json")
}

/// Sample snapshot with two churches, four users, and a month of set-lists
pub fn sample_snapshot() -> Snapshot {
    let json = std::fs::read_to_string(fixture_path()).expect("fixture readable");
    Snapshot::from_json(&json).expect("fixture parses")
}

/// Role resolver over the sample snapshot
pub fn sample_resolver() -> RoleResolver {
    RoleResolver::from_store(Arc::new(MemoryStore::from_snapshot(&sample_snapshot())))
}
