// ABOUTME: Capability interfaces for the external document store and an in-memory implementation
// ABOUTME: User and membership lookups consumed by role resolution, plus JSON snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! # Storage Collaborators
//!
//! Durability and change propagation belong to an external managed store.
//! The core only needs point-in-time lookups, expressed as the async traits
//! below. [`MemoryStore`] implements them over a [`Snapshot`] for tests,
//! tooling and single-tenant use.

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::models::{ChurchMember, TenantId, User, UserId};

/// In-memory store over snapshot data
pub mod memory;

/// Point-in-time snapshot documents
pub mod snapshot;

pub use memory::MemoryStore;
pub use snapshot::Snapshot;

/// User-record lookup by id
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch a user; `Ok(None)` when no record exists
    async fn get_user(&self, user_id: &UserId) -> AppResult<Option<User>>;
}

/// Membership lookup by (user, tenant)
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// Fetch memberships of `user_id` in `tenant_id`; zero or one is expected
    async fn find_memberships(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> AppResult<Vec<ChurchMember>>;
}
