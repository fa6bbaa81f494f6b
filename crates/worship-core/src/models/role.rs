// ABOUTME: Closed role vocabularies for church-scoped and system-level access
// ABOUTME: Role and SystemRole enums with boundary parsing that rejects unknown names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Deduplicated set of church roles; iteration order follows the enum order
pub type RoleSet = BTreeSet<Role>;

/// Deduplicated set of system roles
pub type SystemRoleSet = BTreeSet<SystemRole>;

/// Lowercase a role name and drop separators so `music_manager`,
/// `MusicManager` and `music manager` compare equal.
fn fold_role_name(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Church role vocabulary, assignable globally on a user or within one church membership
///
/// The vocabulary carries no hierarchy; ordering between roles is decided by
/// the authorization checks that consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Platform owner
    RootAdmin,
    /// Church administrator
    Admin,
    /// Manages events and service plans
    EventManager,
    /// Manages giving and finance records
    Finance,
    /// Manages the member directory
    MemberManager,
    /// Manages songs and set-lists
    MusicManager,
    /// Member of the music team
    MusicMember,
}

impl Role {
    /// Every role in vocabulary order
    pub const ALL: [Self; 7] = [
        Self::RootAdmin,
        Self::Admin,
        Self::EventManager,
        Self::Finance,
        Self::MemberManager,
        Self::MusicManager,
        Self::MusicMember,
    ];

    /// Canonical camelCase name as stored in documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootAdmin => "rootAdmin",
            Self::Admin => "admin",
            Self::EventManager => "eventManager",
            Self::Finance => "finance",
            Self::MemberManager => "memberManager",
            Self::MusicManager => "musicManager",
            Self::MusicMember => "musicMember",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_role_name(s).as_str() {
            "rootadmin" => Ok(Self::RootAdmin),
            "admin" => Ok(Self::Admin),
            "eventmanager" => Ok(Self::EventManager),
            "finance" => Ok(Self::Finance),
            "membermanager" => Ok(Self::MemberManager),
            "musicmanager" => Ok(Self::MusicManager),
            "musicmember" => Ok(Self::MusicMember),
            _ => Err(AppError::invalid_input(format!("unknown role '{s}'"))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// System-level vocabulary for platform operators, separate from church roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SystemRole {
    /// Platform owner
    RootAdmin,
    /// Platform administrator
    SystemAdmin,
    /// Support staff
    Support,
    /// Read-only auditor
    Auditor,
}

impl SystemRole {
    /// Canonical camelCase name as stored in documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RootAdmin => "rootAdmin",
            Self::SystemAdmin => "systemAdmin",
            Self::Support => "support",
            Self::Auditor => "auditor",
        }
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_role_name(s).as_str() {
            "rootadmin" => Ok(Self::RootAdmin),
            "systemadmin" => Ok(Self::SystemAdmin),
            "support" => Ok(Self::Support),
            "auditor" => Ok(Self::Auditor),
            _ => Err(AppError::invalid_input(format!("unknown system role '{s}'"))),
        }
    }
}

impl TryFrom<String> for SystemRole {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SystemRole> for String {
    fn from(role: SystemRole) -> Self {
        role.as_str().to_owned()
    }
}
