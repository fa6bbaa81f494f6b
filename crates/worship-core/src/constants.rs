// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for scheduling defaults, display palette, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Set-list and suggestion defaults
pub mod scheduling {
    /// Title substituted for a set-list entry whose song no longer exists
    pub const UNKNOWN_SONG_TITLE: &str = "Unknown";
    /// Default number of songs returned by the suggestion engine
    pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
    /// Default number of most recent set-lists considered for suggestions
    pub const DEFAULT_SUGGESTION_WINDOW: usize = 8;
    /// Canonical calendar day key format
    pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
}

/// Section display palette
pub mod palette {
    /// Color returned for titles outside the palette
    pub const TRANSPARENT: &str = "transparent";
    /// Opening section color
    pub const OPENING: &str = "rgba(59, 130, 246, 0.15)";
    /// Praise section color
    pub const PRAISE: &str = "rgba(234, 179, 8, 0.15)";
    /// Worship section color
    pub const WORSHIP: &str = "rgba(168, 85, 247, 0.15)";
    /// Offering section color
    pub const OFFERING: &str = "rgba(34, 197, 94, 0.15)";
    /// Altar call section color
    pub const ALTAR_CALL: &str = "rgba(239, 68, 68, 0.15)";
    /// Special song section color
    pub const SPECIAL_SONG: &str = "rgba(236, 72, 153, 0.15)";
}

/// Export column headers
pub mod export {
    /// Header row handed to spreadsheet/CSV collaborators
    pub const HEADERS: [&str; 4] = ["#", "Title", "Key", "Notes"];
}

/// Environment variable names read by configuration
pub mod env_config {
    /// Maximum songs per suggestion request
    pub const SUGGESTION_LIMIT: &str = "WORSHIP_SUGGESTION_LIMIT";
    /// Number of recent set-lists fed to the suggestion engine
    pub const SUGGESTION_WINDOW: &str = "WORSHIP_SUGGESTION_WINDOW";
    /// Placeholder title for dangling song references
    pub const UNKNOWN_SONG_TITLE: &str = "WORSHIP_UNKNOWN_SONG_TITLE";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Default service name
    pub const WORSHIP_PLANNER: &str = "worship-planner";
}
