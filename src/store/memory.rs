// ABOUTME: DashMap-backed implementation of the user and membership directories
// ABOUTME: Loaded from a snapshot and replaceable wholesale when a new snapshot arrives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use super::{MembershipDirectory, Snapshot, UserDirectory};
use crate::errors::AppResult;
use crate::models::{ChurchMember, TenantId, User, UserId};

/// Concurrent in-memory directory of users and memberships
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<UserId, User>,
    memberships: DashMap<(UserId, TenantId), Vec<ChurchMember>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let store = Self::new();
        store.replace(snapshot);
        store
    }

    /// Drop all data and load the snapshot's users and memberships
    pub fn replace(&self, snapshot: &Snapshot) {
        self.users.clear();
        self.memberships.clear();
        for user in &snapshot.users {
            self.insert_user(user.clone());
        }
        for member in &snapshot.members {
            self.insert_member(member.clone());
        }
        debug!(
            users = self.users.len(),
            memberships = self.memberships.len(),
            "Replaced in-memory directory"
        );
    }

    /// Insert or overwrite a user record
    pub fn insert_user(&self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    /// Add a membership record
    ///
    /// Duplicate (user, tenant) records are kept; role resolution decides
    /// which one wins.
    pub fn insert_member(&self, member: ChurchMember) {
        self.memberships
            .entry((member.user_id.clone(), member.tenant_id.clone()))
            .or_default()
            .push(member);
    }

    /// Remove every membership of `user_id` in `tenant_id`
    pub fn remove_memberships(&self, user_id: &UserId, tenant_id: &TenantId) {
        self.memberships
            .remove(&(user_id.clone(), tenant_id.clone()));
    }

    /// Number of user records
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn get_user(&self, user_id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(user_id).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl MembershipDirectory for MemoryStore {
    async fn find_memberships(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> AppResult<Vec<ChurchMember>> {
        Ok(self
            .memberships
            .get(&(user_id.clone(), tenant_id.clone()))
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }
}
