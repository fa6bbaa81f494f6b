// ABOUTME: Set-list, suggestion, and calendar engines for service planning
// ABOUTME: Pure, stateless transformations over already-fetched snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! # Scheduling Engines
//!
//! Every function here is synchronous and keeps no state between calls, so
//! it is safe to re-run on each new snapshot delivered by the store.

/// Day bucketing for calendar views
pub mod calendar;

/// Set-list ordering and export rows
pub mod set_list;

/// Frequency-ranked song suggestions
pub mod suggestions;

pub use calendar::{day_key, group_by_day, group_plans_by_day, DayGroups};
pub use set_list::{materialize, ExportRow, SetListEngine};
pub use suggestions::{rank, suggest, SongSuggestionEngine, SongUsage};
