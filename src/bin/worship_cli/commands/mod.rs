// ABOUTME: Re-exports command modules for worship-cli
// ABOUTME: Access (roles), music (set-lists, suggestions), and plans (calendar, agenda, templates)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

pub mod access;
pub mod music;
pub mod plans;
