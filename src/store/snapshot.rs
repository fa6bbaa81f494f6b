// ABOUTME: Point-in-time snapshot of church documents loaded from JSON
// ABOUTME: Provides tenant filtering and recent set-list windows for the engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::cmp::Reverse;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppResult;
use crate::models::{ChurchMember, Event, ServicePlan, SetList, SetListId, Song, TenantId, User};

/// Complete copy of every collection the engines read
///
/// A store subscription delivers a full replacement snapshot on each remote
/// change; nothing here is incremental.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// User identities
    #[serde(default)]
    pub users: Vec<User>,
    /// Church memberships
    #[serde(default)]
    pub members: Vec<ChurchMember>,
    /// Song catalog
    #[serde(default)]
    pub songs: Vec<Song>,
    /// Set-lists of every plan
    #[serde(default)]
    pub set_lists: Vec<SetList>,
    /// Calendar events
    #[serde(default)]
    pub events: Vec<Event>,
    /// Service plans
    #[serde(default)]
    pub plans: Vec<ServicePlan>,
}

impl Snapshot {
    /// Parse a snapshot document
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::SerializationError` for malformed JSON, unknown
    /// role names, or unparseable dates.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::StorageError` if the file cannot be read, or the
    /// errors of [`Snapshot::from_json`].
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let snapshot = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            users = snapshot.users.len(),
            members = snapshot.members.len(),
            songs = snapshot.songs.len(),
            set_lists = snapshot.set_lists.len(),
            events = snapshot.events.len(),
            plans = snapshot.plans.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Set-list by id
    #[must_use]
    pub fn set_list(&self, id: &SetListId) -> Option<&SetList> {
        self.set_lists.iter().find(|set_list| &set_list.id == id)
    }

    /// The `window` most recent set-lists, newest first
    ///
    /// Undated set-lists sort after dated ones, keeping snapshot order.
    #[must_use]
    pub fn recent_set_lists(&self, tenant_id: Option<&TenantId>, window: usize) -> Vec<SetList> {
        let mut candidates: Vec<&SetList> = self
            .set_lists
            .iter()
            .filter(|set_list| tenant_id.is_none_or(|tenant| &set_list.tenant_id == tenant))
            .collect();
        candidates.sort_by_key(|set_list| (set_list.date.is_none(), Reverse(set_list.date)));
        candidates.into_iter().take(window).cloned().collect()
    }

    /// Events of one church, or all events when `tenant_id` is `None`
    #[must_use]
    pub fn events_for(&self, tenant_id: Option<&TenantId>) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| tenant_id.is_none_or(|tenant| &event.tenant_id == tenant))
            .cloned()
            .collect()
    }
}
