// ABOUTME: Unified error handling re-exported from worship-core
// ABOUTME: AppError with stable error codes and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

pub use worship_core::errors::*;
