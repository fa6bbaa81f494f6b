// ABOUTME: Seeds new service plans from the service and section template catalogs
// ABOUTME: Copies template defaults into a fresh plan with a generated id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::section_templates::{self, SectionTemplate};
use super::service_templates;
use crate::errors::{AppError, AppResult};
use crate::models::{PlanId, Section, ServicePlan, SongId, TenantId};

impl From<&SectionTemplate> for Section {
    fn from(template: &SectionTemplate) -> Self {
        Self {
            title: template.title.to_owned(),
            start_time: None,
            duration_minutes: None,
            person: template.person.map(str::to_owned),
            notes: template.notes.map(str::to_owned),
            song_ids: template.song_ids.iter().copied().map(SongId::from).collect(),
        }
    }
}

/// Build a new plan from a service template and a selection of section templates
///
/// When `section_template_ids` is empty the service template's own section
/// sequence is used. Unknown section ids are skipped with a warning so a
/// stale selection never blocks plan creation.
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` if `service_template_id` is not in the catalog.
pub fn build_plan(
    tenant_id: TenantId,
    date: NaiveDate,
    service_template_id: &str,
    section_template_ids: &[&str],
) -> AppResult<ServicePlan> {
    let service = service_templates::find(service_template_id).ok_or_else(|| {
        AppError::not_found(format!("service template '{service_template_id}'"))
    })?;

    let selection = if section_template_ids.is_empty() {
        service.section_ids
    } else {
        section_template_ids
    };

    let sections: Vec<Section> = selection
        .iter()
        .filter_map(|id| {
            let template = section_templates::find(id);
            if template.is_none() {
                warn!(section_template_id = %id, "Skipping unknown section template");
            }
            template
        })
        .map(Section::from)
        .collect();

    let mut plan = ServicePlan::new(PlanId::generate(), tenant_id, date, service.name);
    plan.theme = service.theme.map(str::to_owned);
    plan.scripture = service.scripture.map(str::to_owned);
    plan.notes = service.notes.map(str::to_owned);
    plan.template_id = Some(service.id.to_owned());
    plan.sections = sections;

    debug!(
        plan_id = %plan.id,
        tenant_id = %plan.tenant_id,
        template = service.id,
        sections = plan.sections.len(),
        "Seeded service plan from template"
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 22).unwrap()
    }

    #[test]
    fn test_default_sections_follow_template() {
        let plan = build_plan(TenantId::new("grace"), sunday(), "christmas", &[]).unwrap();
        let titles: Vec<&str> = plan.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Opening", "Praise", "Scripture Reading", "Special Song", "Sermon", "Offering", "Benediction"]
        );
        assert_eq!(plan.theme.as_deref(), Some("Emmanuel, God with us"));
        assert_eq!(plan.template_id.as_deref(), Some("christmas"));
        assert_eq!(plan.date, sunday());
    }

    #[test]
    fn test_explicit_selection_skips_unknown_ids() {
        let plan = build_plan(
            TenantId::new("grace"),
            sunday(),
            "sunday-morning",
            &["benediction", "potluck", "opening"],
        )
        .unwrap();
        assert_eq!(plan.sections.len(), 2);
        assert_eq!(plan.sections[0].title, "Benediction");
        assert_eq!(plan.sections[0].song_ids, vec![SongId::new("doxology")]);
        assert_eq!(plan.sections[0].person.as_deref(), Some("Pastor"));
    }

    #[test]
    fn test_unknown_service_template() {
        let err = build_plan(TenantId::new("grace"), sunday(), "vigil", &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_each_plan_gets_a_fresh_id() {
        let a = build_plan(TenantId::new("grace"), sunday(), "easter", &[]).unwrap();
        let b = build_plan(TenantId::new("grace"), sunday(), "easter", &[]).unwrap();
        assert_ne!(a.id, b.id);
    }
}
