// ABOUTME: Domain models for churches, users, songs, set-lists, plans, and events
// ABOUTME: Re-exported from worship-core so dependents use a single import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

pub use worship_core::models::*;
