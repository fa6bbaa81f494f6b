// ABOUTME: Core types and constants for the Worship Planner platform
// ABOUTME: Foundation crate with error handling, constants, permissions, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

#![deny(unsafe_code)]

//! # Worship Core
//!
//! Foundation crate providing shared types and constants for the Worship
//! Planner service-plan engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Church domain models (users, memberships, songs, set-lists, plans, events)
//! - **permissions**: Capability flags derived from church roles

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (User, ChurchMember, Song, SetList, ServicePlan, Event)
pub mod models;

/// Role-based capability flags with bitflags
pub mod permissions;
