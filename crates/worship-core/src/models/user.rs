// ABOUTME: User identity and per-church membership models
// ABOUTME: User carries global roles, ChurchMember carries tenant-scoped roles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use serde::{Deserialize, Serialize};

use super::ids::{TenantId, UserId};
use super::role::{Role, RoleSet, SystemRoleSet};

/// User identity as held by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider user id
    pub id: UserId,
    /// Name shown in rosters and section assignments
    #[serde(default)]
    pub display_name: String,
    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Global church roles, applicable in every church the user belongs to
    #[serde(default)]
    pub roles: RoleSet,
    /// Platform-operator roles
    #[serde(default)]
    pub system_roles: SystemRoleSet,
}

impl User {
    /// Creates a user with no roles
    #[must_use]
    pub fn new(id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: None,
            roles: RoleSet::new(),
            system_roles: SystemRoleSet::new(),
        }
    }

    /// Builder-style helper adding global roles
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles.extend(roles);
        self
    }
}

/// Membership of one user in one church
///
/// Documents written before roles were introduced lack the attribute, so
/// `roles` is optional and absence means no tenant-scoped roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurchMember {
    /// Member user id
    pub user_id: UserId,
    /// Church the membership belongs to
    pub tenant_id: TenantId,
    /// Tenant-scoped roles, if the document carries them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<RoleSet>,
}

impl ChurchMember {
    /// Creates a membership with the given tenant-scoped roles
    #[must_use]
    pub fn new(
        user_id: impl Into<UserId>,
        tenant_id: impl Into<TenantId>,
        roles: impl IntoIterator<Item = Role>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
            roles: Some(roles.into_iter().collect()),
        }
    }

    /// Tenant-scoped roles, empty when the attribute is absent
    #[must_use]
    pub fn tenant_roles(&self) -> RoleSet {
        self.roles.clone().unwrap_or_default()
    }
}
