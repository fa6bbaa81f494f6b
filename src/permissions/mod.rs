// ABOUTME: Role-based permission system re-exported from worship-core
// ABOUTME: Adds the async role resolver over the store's user and membership lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

pub use worship_core::permissions::*;

/// Effective role resolution for a (user, church) pair
pub mod resolver;

pub use resolver::{merge_roles, RoleResolver};
