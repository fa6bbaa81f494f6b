// ABOUTME: Configuration module for the worship planner
// ABOUTME: Typed environment values and the planner configuration loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

/// Planner configuration from environment variables
pub mod environment;

/// Typed configuration values
pub mod types;

pub use environment::PlannerConfig;
pub use types::Environment;
