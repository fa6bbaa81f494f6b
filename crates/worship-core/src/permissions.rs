// ABOUTME: Capability flags derived from resolved church roles
// ABOUTME: Maps each Role onto Permissions bitflags used to gate plan-editing actions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! Role-based capabilities
//!
//! Roles carry no hierarchy in data. The mapping below is the single place
//! that decides what each role may do; an empty role set maps to no
//! permissions, which is a valid no-access state.

use bitflags::bitflags;

use crate::errors::{AppError, AppResult};
use crate::models::{Role, RoleSet};

bitflags! {
    /// Actions a member may take within one church
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u16 {
        /// Church settings and role assignment
        const MANAGE_CHURCH = 0b0000_0001;
        /// Calendar events
        const MANAGE_EVENTS = 0b0000_0010;
        /// Giving and finance records
        const MANAGE_FINANCE = 0b0000_0100;
        /// Member directory
        const MANAGE_MEMBERS = 0b0000_1000;
        /// Song catalog and set-lists
        const MANAGE_MUSIC = 0b0001_0000;
        /// Read songs, charts and set-lists
        const VIEW_MUSIC = 0b0010_0000;
        /// Create and edit service plans
        const EDIT_PLANS = 0b0100_0000;
        /// Read service plans
        const VIEW_PLANS = 0b1000_0000;
    }
}

impl Permissions {
    /// Capabilities granted by a single role
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::RootAdmin | Role::Admin => Self::all(),
            Role::EventManager => Self::MANAGE_EVENTS
                .union(Self::EDIT_PLANS)
                .union(Self::VIEW_PLANS),
            Role::Finance => Self::MANAGE_FINANCE,
            Role::MemberManager => Self::MANAGE_MEMBERS,
            Role::MusicManager => Self::MANAGE_MUSIC
                .union(Self::VIEW_MUSIC)
                .union(Self::EDIT_PLANS)
                .union(Self::VIEW_PLANS),
            Role::MusicMember => Self::VIEW_MUSIC.union(Self::VIEW_PLANS),
        }
    }

    /// Union of the capabilities of every role in the set
    #[must_use]
    pub fn from_roles(roles: &RoleSet) -> Self {
        roles
            .iter()
            .fold(Self::empty(), |acc, role| acc | Self::for_role(*role))
    }

    /// Whether service plans may be created or edited
    #[must_use]
    pub const fn can_edit_plan(self) -> bool {
        self.contains(Self::EDIT_PLANS)
    }

    /// Whether songs and set-lists may be changed
    #[must_use]
    pub const fn can_manage_music(self) -> bool {
        self.contains(Self::MANAGE_MUSIC)
    }

    /// Fail with `PermissionDenied` unless every flag in `required` is held
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::PermissionDenied` naming the missing capabilities.
    pub fn require(self, required: Self) -> AppResult<()> {
        let missing = required.difference(self);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::permission_denied(missing.describe()))
        }
    }

    /// Comma-separated flag names for logging
    #[must_use]
    pub fn describe(&self) -> String {
        self.iter_names()
            .map(|(name, _)| name.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
