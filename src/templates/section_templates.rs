// ABOUTME: Static catalog of reusable service-section templates
// ABOUTME: Read-only seed data exposed in catalog order with lookup by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use serde::Serialize;

/// Reusable section with optional default content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTemplate {
    /// Stable template id
    pub id: &'static str,
    /// Section title copied into plans
    pub title: &'static str,
    /// Default notes
    pub notes: Option<&'static str>,
    /// Default person or team
    pub person: Option<&'static str>,
    /// Default song ids
    pub song_ids: &'static [&'static str],
}

static SECTION_TEMPLATES: [SectionTemplate; 10] = [
    SectionTemplate {
        id: "opening",
        title: "Opening",
        notes: Some("Welcome and call to worship"),
        person: None,
        song_ids: &[],
    },
    SectionTemplate {
        id: "praise",
        title: "Praise",
        notes: Some("Up-tempo congregational songs"),
        person: Some("Worship Team"),
        song_ids: &[],
    },
    SectionTemplate {
        id: "worship",
        title: "Worship",
        notes: Some("Slower songs leading into prayer"),
        person: Some("Worship Team"),
        song_ids: &[],
    },
    SectionTemplate {
        id: "announcements",
        title: "Announcements",
        notes: None,
        person: None,
        song_ids: &[],
    },
    SectionTemplate {
        id: "offering",
        title: "Offering",
        notes: Some("Offertory prayer and collection"),
        person: None,
        song_ids: &[],
    },
    SectionTemplate {
        id: "special-song",
        title: "Special Song",
        notes: None,
        person: None,
        song_ids: &[],
    },
    SectionTemplate {
        id: "scripture-reading",
        title: "Scripture Reading",
        notes: None,
        person: None,
        song_ids: &[],
    },
    SectionTemplate {
        id: "sermon",
        title: "Sermon",
        notes: None,
        person: Some("Pastor"),
        song_ids: &[],
    },
    SectionTemplate {
        id: "altar-call",
        title: "Altar Call",
        notes: Some("Invitation and prayer ministry"),
        person: Some("Pastor"),
        song_ids: &[],
    },
    SectionTemplate {
        id: "benediction",
        title: "Benediction",
        notes: Some("Closing blessing"),
        person: Some("Pastor"),
        song_ids: &["doxology"],
    },
];

/// Every section template in catalog order
#[must_use]
pub fn all() -> &'static [SectionTemplate] {
    &SECTION_TEMPLATES
}

/// Section template by id
#[must_use]
pub fn find(id: &str) -> Option<&'static SectionTemplate> {
    SECTION_TEMPLATES.iter().find(|template| template.id == id)
}

/// Template ids in catalog order
pub fn ids() -> impl Iterator<Item = &'static str> {
    SECTION_TEMPLATES.iter().map(|template| template.id)
}
