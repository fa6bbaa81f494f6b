// ABOUTME: Song suggestion ranking by recent-usage frequency across set-lists
// ABOUTME: Counts every entry, ranks by count with first-encounter tie-break, drops dangling ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::cmp::Reverse;

use serde::Serialize;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::constants::scheduling::DEFAULT_SUGGESTION_LIMIT;
use crate::models::{SetList, Song, SongId, SongLookup};
use crate::utils::InsertionOrderedMap;

/// Usage count for one song id across the supplied set-lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SongUsage {
    /// Song id as referenced by entries
    pub song_id: SongId,
    /// Number of entries referencing it
    pub count: usize,
}

/// Rank every referenced song id by usage
///
/// A song appearing twice in one set-list counts twice. Ties keep the order
/// in which ids were first encountered while walking set-lists and entries
/// in the order supplied.
#[must_use]
pub fn rank(recent_set_lists: &[SetList]) -> Vec<SongUsage> {
    let mut tally: InsertionOrderedMap<&SongId, usize> = InsertionOrderedMap::new();
    for entry in recent_set_lists.iter().flat_map(|set_list| &set_list.entries) {
        *tally.entry_or_insert_with(&entry.song_id, || 0) += 1;
    }

    let mut ranked = tally.into_entries();
    // Stable sort: equal counts stay in first-encounter order
    ranked.sort_by_key(|&(_, count)| Reverse(count));

    ranked
        .into_iter()
        .map(|(song_id, count)| SongUsage {
            song_id: song_id.clone(),
            count,
        })
        .collect()
}

/// Proposes songs for a new plan from recent usage
#[derive(Debug, Clone, Copy)]
pub struct SongSuggestionEngine {
    limit: usize,
}

impl Default for SongSuggestionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}

impl SongSuggestionEngine {
    /// Create an engine returning at most `limit` songs
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Create an engine from planner configuration
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.suggestion_limit)
    }

    /// Maximum number of songs returned
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Top songs by usage, resolved against the catalog
    ///
    /// The top `limit` ids are taken before resolution; ids no longer in the
    /// catalog are dropped, so fewer than `limit` songs may come back.
    pub fn suggest<C>(&self, recent_set_lists: &[SetList], catalog: &C) -> Vec<Song>
    where
        C: SongLookup + ?Sized,
    {
        let ranked = rank(recent_set_lists);
        let distinct = ranked.len();

        let suggestions: Vec<Song> = ranked
            .into_iter()
            .take(self.limit)
            .filter_map(|usage| catalog.find_song(&usage.song_id).cloned())
            .collect();

        debug!(
            set_lists = recent_set_lists.len(),
            distinct_songs = distinct,
            limit = self.limit,
            suggested = suggestions.len(),
            "Ranked song suggestions"
        );

        suggestions
    }
}

/// Suggest up to `limit` songs
pub fn suggest<C>(recent_set_lists: &[SetList], catalog: &C, limit: usize) -> Vec<Song>
where
    C: SongLookup + ?Sized,
{
    SongSuggestionEngine::new(limit).suggest(recent_set_lists, catalog)
}
