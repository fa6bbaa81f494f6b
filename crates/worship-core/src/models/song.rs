// ABOUTME: Song catalog model and the lookup capability used by scheduling engines
// ABOUTME: SongLookup is implemented for slices, vectors, and id-keyed maps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::collections::HashMap;
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use super::ids::SongId;

/// Reusable catalog song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Catalog id
    pub id: SongId,
    /// Song title
    pub title: String,
    /// Writer or artist credit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Key the song is usually led in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_key: Option<String>,
    /// Tempo in beats per minute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<u16>,
    /// CCLI licensing number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccli_number: Option<String>,
    /// Free-form tags (e.g. `christmas`, `communion`)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Song {
    /// Creates a song with only id and title
    #[must_use]
    pub fn new(id: impl Into<SongId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: None,
            default_key: None,
            tempo: None,
            ccli_number: None,
            tags: Vec::new(),
        }
    }
}

/// Song lookup by id against a catalog
///
/// A missing song is a normal outcome: entries may reference songs deleted
/// after the set-list was written.
pub trait SongLookup {
    /// Find a song by id
    fn find_song(&self, id: &SongId) -> Option<&Song>;
}

impl SongLookup for [Song] {
    fn find_song(&self, id: &SongId) -> Option<&Song> {
        self.iter().find(|song| &song.id == id)
    }
}

impl SongLookup for Vec<Song> {
    fn find_song(&self, id: &SongId) -> Option<&Song> {
        self.as_slice().find_song(id)
    }
}

impl<S: BuildHasher> SongLookup for HashMap<SongId, Song, S> {
    fn find_song(&self, id: &SongId) -> Option<&Song> {
        self.get(id)
    }
}

impl<T: SongLookup + ?Sized> SongLookup for &T {
    fn find_song(&self, id: &SongId) -> Option<&Song> {
        (**self).find_song(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::BuildHasherDefault;

    #[test]
    fn test_lookup_over_slice_and_custom_hasher_map() {
        let songs = vec![Song::new("a", "Alpha"), Song::new("b", "Beta")];
        assert_eq!(songs.find_song(&SongId::new("b")).unwrap().title, "Beta");
        assert!(songs.as_slice().find_song(&SongId::new("z")).is_none());

        let mut by_id: HashMap<SongId, Song, BuildHasherDefault<DefaultHasher>> =
            HashMap::default();
        for song in &songs {
            by_id.insert(song.id.clone(), song.clone());
        }
        assert_eq!(by_id.find_song(&SongId::new("a")).unwrap().title, "Alpha");
    }
}
