// ABOUTME: Static catalog of whole-service templates used to seed new plans
// ABOUTME: Each template carries theme, scripture, notes, and its default section sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use serde::Serialize;

/// Whole-service template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTemplate {
    /// Stable template id
    pub id: &'static str,
    /// Name shown when picking a template
    pub name: &'static str,
    /// Default theme
    pub theme: Option<&'static str>,
    /// Default scripture reading
    pub scripture: Option<&'static str>,
    /// Default notes
    pub notes: Option<&'static str>,
    /// Section template ids, in program order
    pub section_ids: &'static [&'static str],
}

static SERVICE_TEMPLATES: [ServiceTemplate; 5] = [
    ServiceTemplate {
        id: "sunday-morning",
        name: "Sunday Morning Service",
        theme: None,
        scripture: None,
        notes: None,
        section_ids: &[
            "opening",
            "praise",
            "worship",
            "announcements",
            "offering",
            "sermon",
            "altar-call",
            "benediction",
        ],
    },
    ServiceTemplate {
        id: "communion",
        name: "Communion Sunday",
        theme: Some("The Lord's Supper"),
        scripture: Some("1 Corinthians 11:23-26"),
        notes: Some("Prepare elements before the service"),
        section_ids: &["opening", "praise", "scripture-reading", "sermon", "worship", "benediction"],
    },
    ServiceTemplate {
        id: "christmas",
        name: "Christmas Service",
        theme: Some("Emmanuel, God with us"),
        scripture: Some("Luke 2:1-20"),
        notes: None,
        section_ids: &[
            "opening",
            "praise",
            "scripture-reading",
            "special-song",
            "sermon",
            "offering",
            "benediction",
        ],
    },
    ServiceTemplate {
        id: "easter",
        name: "Easter Sunday",
        theme: Some("He is risen"),
        scripture: Some("Matthew 28:1-10"),
        notes: None,
        section_ids: &[
            "opening",
            "praise",
            "special-song",
            "sermon",
            "altar-call",
            "worship",
            "benediction",
        ],
    },
    ServiceTemplate {
        id: "prayer-meeting",
        name: "Midweek Prayer Meeting",
        theme: None,
        scripture: None,
        notes: Some("Collect prayer requests beforehand"),
        section_ids: &["opening", "worship", "scripture-reading", "benediction"],
    },
];

/// Every service template in catalog order
#[must_use]
pub fn all() -> &'static [ServiceTemplate] {
    &SERVICE_TEMPLATES
}

/// Service template by id
#[must_use]
pub fn find(id: &str) -> Option<&'static ServiceTemplate> {
    SERVICE_TEMPLATES.iter().find(|template| template.id == id)
}

/// Template ids in catalog order
pub fn ids() -> impl Iterator<Item = &'static str> {
    SERVICE_TEMPLATES.iter().map(|template| template.id)
}
