// ABOUTME: Section title to display color resolution over a fixed palette
// ABOUTME: Titles are whitespace-stripped and lowercased; unknown titles are transparent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use crate::constants::palette;

/// Palette keyed by normalized title
const PALETTE: [(&str, &str); 6] = [
    ("opening", palette::OPENING),
    ("praise", palette::PRAISE),
    ("worship", palette::WORSHIP),
    ("offering", palette::OFFERING),
    ("altarcall", palette::ALTAR_CALL),
    ("specialsong", palette::SPECIAL_SONG),
];

/// Strip all whitespace and lowercase (`" Altar Call "` becomes `"altarcall"`)
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Display color for a section title, `"transparent"` when the title is not in the palette
#[must_use]
pub fn color_for(title: &str) -> &'static str {
    let key = normalize_title(title);
    PALETTE
        .iter()
        .find(|&&(name, _)| name == key)
        .map_or(palette::TRANSPARENT, |&(_, color)| color)
}
