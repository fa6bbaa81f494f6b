// ABOUTME: Utility modules shared across the scheduling engines
// ABOUTME: Contains the insertion-ordered map used for tallies and day buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

/// Insertion-ordered map with hashed lookup
pub mod ordered_map;

pub use ordered_map::InsertionOrderedMap;
