// ABOUTME: Helper modules for worship-cli
// ABOUTME: Output formatting shared across commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

pub mod display;
