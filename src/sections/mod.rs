// ABOUTME: Section display support for service plans
// ABOUTME: Title-based color resolution and time-ordered plan agendas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

/// Title to color palette resolution
pub mod colors;

/// Time-ordered agenda rendering
pub mod agenda;

pub use agenda::{agenda, AgendaItem};
pub use colors::{color_for, normalize_title};
