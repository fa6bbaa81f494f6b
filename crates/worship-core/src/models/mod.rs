// ABOUTME: Core data models for the Worship Planner platform
// ABOUTME: Re-exports ids, roles, users, memberships, songs, set-lists, plans, and events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! # Data Models
//!
//! Documents arrive from a loosely-structured external store, so every
//! optional attribute is an explicit `Option` or a `#[serde(default)]`
//! collection with a defined meaning on absence. Role names are the one
//! exception: they are validated against the closed vocabulary while the
//! document is parsed.
//!
//! ## Core Models
//!
//! - `User` / `ChurchMember`: global and tenant-scoped role assignments
//! - `Song` / `SongLookup`: catalog entries and lookup by id
//! - `SetList` / `SetListSongEntry`: ordered song programs
//! - `ServicePlan` / `Section`: dated programs of timed sections
//! - `Event`: calendar-placed items

mod event;
mod ids;
mod role;
mod service_plan;
mod set_list;
mod song;
mod user;

pub use event::{parse_wall_clock, Event};
pub use ids::{EventId, PlanId, SetListId, SongId, TenantId, UserId};
pub use role::{Role, RoleSet, SystemRole, SystemRoleSet};
pub use service_plan::{Section, ServicePlan};
pub use set_list::{SetList, SetListSongEntry};
pub use song::{Song, SongLookup};
pub use user::{ChurchMember, User};
