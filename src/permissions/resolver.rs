// ABOUTME: Resolves a user's effective roles in one church from global and tenant-scoped grants
// ABOUTME: Union of user-record roles and the membership's roles, with absence meaning none
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::sync::Arc;

use tracing::{debug, warn};

use super::Permissions;
use crate::errors::AppResult;
use crate::models::{ChurchMember, RoleSet, SystemRoleSet, TenantId, UserId};
use crate::store::{MembershipDirectory, UserDirectory};

/// Union of global and tenant-scoped roles
#[must_use]
pub fn merge_roles(global: RoleSet, tenant: RoleSet) -> RoleSet {
    let mut roles = global;
    roles.extend(tenant);
    roles
}

/// Computes effective roles from the store's point-in-time state
///
/// Each call reads the store afresh; nothing is cached between calls.
#[derive(Clone)]
pub struct RoleResolver {
    users: Arc<dyn UserDirectory>,
    memberships: Arc<dyn MembershipDirectory>,
}

impl RoleResolver {
    /// Create a resolver over separate user and membership lookups
    #[must_use]
    pub fn new(users: Arc<dyn UserDirectory>, memberships: Arc<dyn MembershipDirectory>) -> Self {
        Self { users, memberships }
    }

    /// Create a resolver over a single store serving both lookups
    #[must_use]
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UserDirectory + MembershipDirectory + 'static,
    {
        Self {
            users: store.clone(),
            memberships: store,
        }
    }

    /// Effective roles of `user_id` within `tenant_id`
    ///
    /// A missing user record contributes no global roles; a missing
    /// membership, or one without a roles attribute, contributes no tenant
    /// roles. When several memberships exist for the pair, the first one is
    /// used.
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures.
    pub async fn resolve_roles(&self, user_id: &UserId, tenant_id: &TenantId) -> AppResult<RoleSet> {
        let global = self
            .users
            .get_user(user_id)
            .await?
            .map(|user| user.roles)
            .unwrap_or_default();

        let memberships = self.memberships.find_memberships(user_id, tenant_id).await?;
        if memberships.len() > 1 {
            warn!(
                user_id = %user_id,
                tenant_id = %tenant_id,
                count = memberships.len(),
                "Multiple memberships for one user and church, using the first"
            );
        }
        let tenant = memberships
            .first()
            .map(ChurchMember::tenant_roles)
            .unwrap_or_default();

        let roles = merge_roles(global, tenant);
        debug!(
            user_id = %user_id,
            tenant_id = %tenant_id,
            roles = roles.len(),
            "Resolved effective roles"
        );
        Ok(roles)
    }

    /// Platform-level roles from the user record, empty if it is missing
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures.
    pub async fn resolve_system_roles(&self, user_id: &UserId) -> AppResult<SystemRoleSet> {
        Ok(self
            .users
            .get_user(user_id)
            .await?
            .map(|user| user.system_roles)
            .unwrap_or_default())
    }

    /// Capability flags granted by the effective roles
    ///
    /// # Errors
    ///
    /// Propagates store lookup failures.
    pub async fn resolve_permissions(
        &self,
        user_id: &UserId,
        tenant_id: &TenantId,
    ) -> AppResult<Permissions> {
        let roles = self.resolve_roles(user_id, tenant_id).await?;
        Ok(Permissions::from_roles(&roles))
    }
}
