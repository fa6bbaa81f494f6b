// ABOUTME: Static template catalogs and plan seeding
// ABOUTME: Section templates, whole-service templates, and the plan builder that combines them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! Template catalogs are immutable process-wide tables. They are exposed
//! only through read accessors and enumerate in catalog order.

/// Reusable section templates
pub mod section_templates;

/// Whole-service templates
pub mod service_templates;

/// Plan seeding from templates
pub mod builder;

pub use builder::build_plan;
pub use section_templates::SectionTemplate;
pub use service_templates::ServiceTemplate;
