// ABOUTME: Planner-wide constants re-exported from worship-core
// ABOUTME: Scheduling defaults, section palette, export headers, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

pub use worship_core::constants::*;
