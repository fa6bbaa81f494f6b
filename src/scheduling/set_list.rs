// ABOUTME: Set-list materialization into ordered, export-ready rows
// ABOUTME: Stable sort by explicit order, song resolution with an Unknown placeholder, 1-based positions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::constants::{export, scheduling::UNKNOWN_SONG_TITLE};
use crate::models::{SetList, SongLookup};

/// One row of a materialized set-list, as handed to export collaborators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    /// 1-based position from sorted rank, independent of stored order values
    pub position: usize,
    /// Song title, or the placeholder when the song no longer exists
    pub title: String,
    /// Musical key, verbatim from the entry
    pub key: String,
    /// Notes, empty when absent
    pub notes: String,
}

impl ExportRow {
    /// Column headers matching [`ExportRow::to_cells`]
    #[must_use]
    pub const fn headers() -> [&'static str; 4] {
        export::HEADERS
    }

    /// Row as string cells for tabular exporters
    #[must_use]
    pub fn to_cells(&self) -> [String; 4] {
        [
            self.position.to_string(),
            self.title.clone(),
            self.key.clone(),
            self.notes.clone(),
        ]
    }
}

/// Orders set-list entries and resolves their songs
#[derive(Debug, Clone)]
pub struct SetListEngine {
    unknown_title: String,
}

impl Default for SetListEngine {
    fn default() -> Self {
        Self::new(UNKNOWN_SONG_TITLE)
    }
}

impl SetListEngine {
    /// Create an engine with a custom placeholder for dangling song references
    #[must_use]
    pub fn new(unknown_title: impl Into<String>) -> Self {
        Self {
            unknown_title: unknown_title.into(),
        }
    }

    /// Create an engine from planner configuration
    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.unknown_song_title.clone())
    }

    /// Materialize a set-list into rows, one per entry
    ///
    /// Entries are stably sorted by `order`, so equal values keep their
    /// stored relative position. A song missing from the catalog yields the
    /// placeholder title rather than an error.
    pub fn materialize<C>(&self, set_list: &SetList, catalog: &C) -> Vec<ExportRow>
    where
        C: SongLookup + ?Sized,
    {
        let mut entries: Vec<_> = set_list.entries.iter().collect();
        entries.sort_by_key(|entry| entry.order);

        let mut dangling = 0_usize;
        let rows: Vec<ExportRow> = entries
            .into_iter()
            .enumerate()
            .map(|(rank, entry)| {
                let title = catalog.find_song(&entry.song_id).map_or_else(
                    || {
                        dangling += 1;
                        self.unknown_title.clone()
                    },
                    |song| song.title.clone(),
                );
                ExportRow {
                    position: rank + 1,
                    title,
                    key: entry.key.clone(),
                    notes: entry.notes.clone().unwrap_or_default(),
                }
            })
            .collect();

        if dangling > 0 {
            warn!(
                set_list_id = %set_list.id,
                dangling,
                "Set-list references songs missing from the catalog"
            );
        }
        debug!(set_list_id = %set_list.id, rows = rows.len(), "Materialized set-list");

        rows
    }
}

/// Materialize with the default `"Unknown"` placeholder
pub fn materialize<C>(set_list: &SetList, catalog: &C) -> Vec<ExportRow>
where
    C: SongLookup + ?Sized,
{
    SetListEngine::default().materialize(set_list, catalog)
}
