// ABOUTME: Set-list models attaching an ordered song program to a service plan
// ABOUTME: Entries carry an explicit order field that is the sole source of sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{PlanId, SetListId, SongId, TenantId};

/// One song slot in a set-list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetListSongEntry {
    /// Referenced catalog song; may dangle
    pub song_id: SongId,
    /// Musical key the song is led in
    #[serde(default)]
    pub key: String,
    /// Arrangement notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sort position; gaps, duplicates and any storage order are allowed
    #[serde(default)]
    pub order: i64,
}

impl SetListSongEntry {
    /// Creates an entry without notes
    #[must_use]
    pub fn new(song_id: impl Into<SongId>, key: impl Into<String>, order: i64) -> Self {
        Self {
            song_id: song_id.into(),
            key: key.into(),
            notes: None,
            order,
        }
    }

    /// Builder-style helper attaching notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Song program for a service plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetList {
    /// Set-list id
    pub id: SetListId,
    /// Owning church
    pub tenant_id: TenantId,
    /// Plan this set-list belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<PlanId>,
    /// Service date, used to pick the most recent set-lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Entries in storage order (not sequence order)
    #[serde(default)]
    pub entries: Vec<SetListSongEntry>,
}

impl SetList {
    /// Creates a set-list with the given entries
    #[must_use]
    pub fn new(
        id: impl Into<SetListId>,
        tenant_id: impl Into<TenantId>,
        entries: Vec<SetListSongEntry>,
    ) -> Self {
        Self {
            id: id.into(),
            tenant_id: tenant_id.into(),
            plan_id: None,
            date: None,
            entries,
        }
    }
}
