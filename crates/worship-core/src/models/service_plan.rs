// ABOUTME: Service plan and section models for weekly worship programs
// ABOUTME: A plan is a dated, tenant-scoped, ordered sequence of timed sections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{PlanId, SetListId, SongId, TenantId};

/// Named segment of a service plan
///
/// The display color is derived from the title and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Free-text title (e.g. `Praise`, `Offering`)
    pub title: String,
    /// Start time as entered, expected `HH:mm`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Planned length in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Person leading the section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Songs embedded in the section
    #[serde(default)]
    pub song_ids: Vec<SongId>,
}

impl Section {
    /// Creates an untimed section with only a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            start_time: None,
            duration_minutes: None,
            person: None,
            notes: None,
            song_ids: Vec::new(),
        }
    }

    /// Builder-style helper setting start time and duration
    #[must_use]
    pub fn at(mut self, start_time: impl Into<String>, duration_minutes: u32) -> Self {
        self.start_time = Some(start_time.into());
        self.duration_minutes = Some(duration_minutes);
        self
    }
}

/// Dated worship program belonging to one church
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlan {
    /// Plan id, unique within the tenant
    pub id: PlanId,
    /// Owning church
    pub tenant_id: TenantId,
    /// Service date
    pub date: NaiveDate,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Sermon or service theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Scripture reading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scripture: Option<String>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Service template the plan was seeded from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// Attached set-list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_list_id: Option<SetListId>,
    /// Sections in program order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ServicePlan {
    /// Creates an empty plan
    #[must_use]
    pub fn new(
        id: PlanId,
        tenant_id: impl Into<TenantId>,
        date: NaiveDate,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            tenant_id: tenant_id.into(),
            date,
            title: title.into(),
            theme: None,
            scripture: None,
            notes: None,
            template_id: None,
            set_list_id: None,
            sections: Vec::new(),
        }
    }
}
