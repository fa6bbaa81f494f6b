// ABOUTME: Main library entry point for the worship planner
// ABOUTME: Role resolution, service-plan templates, set-list export, suggestions, and calendar views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

#![deny(unsafe_code)]

//! # Worship Planner
//!
//! Planning core for multi-tenant church worship services. Each church is an
//! isolated tenant; users hold global roles plus roles scoped to one church.
//!
//! ## Features
//!
//! - **Role resolution**: effective roles are the union of global and
//!   church-scoped grants, mapped onto capability flags
//! - **Service plans**: seeded from static section and service templates,
//!   rendered as a time-ordered, color-coded agenda
//! - **Set-lists**: materialized into export rows against the song catalog
//! - **Suggestions**: songs ranked by recent usage
//! - **Calendar**: events and plans bucketed by day
//!
//! ## Architecture
//!
//! Durability and change propagation belong to an external document store.
//! The engines here are pure functions over point-in-time snapshots and are
//! re-run whenever a new snapshot arrives.
//!
//! ## Example Usage
//!
//! ```rust
//! use worship_planner::models::{SetList, SetListSongEntry, Song};
//! use worship_planner::scheduling::SetListEngine;
//!
//! let catalog = vec![Song::new("amazing-grace", "Amazing Grace")];
//! let set_list = SetList::new(
//!     "easter",
//!     "grace",
//!     vec![SetListSongEntry::new("amazing-grace", "G", 0)],
//! );
//!
//! let rows = SetListEngine::default().materialize(&set_list, &catalog);
//! assert_eq!(rows[0].title, "Amazing Grace");
//! assert_eq!(rows[0].position, 1);
//! ```

/// Planner configuration from environment variables
pub mod config;

/// Scheduling defaults, palette, and environment variable names
pub mod constants;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Capability flags and role resolution
pub mod permissions;

/// Set-list, suggestion, and calendar engines
pub mod scheduling;

/// Section colors and plan agendas
pub mod sections;

/// Storage collaborator interfaces, in-memory store, and snapshots
pub mod store;

/// Section and service template catalogs and plan seeding
pub mod templates;

/// `HH:MM` validation, normalization, and display
pub mod time_format;

/// Shared data structures
pub mod utils;
