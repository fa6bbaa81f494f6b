// ABOUTME: Integration tests for plan seeding, agendas, section colors, and time formatting
// ABOUTME: Seeds plans from the template catalogs and renders the sample plan's agenda
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use worship_planner::constants::palette;
use worship_planner::errors::ErrorCode;
use worship_planner::models::{SongId, TenantId};
use worship_planner::sections::{agenda, color_for};
use worship_planner::templates::{build_plan, section_templates, service_templates};
use worship_planner::time_format;

fn easter_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
}

#[test]
fn test_seed_plan_from_service_template() {
    let plan = build_plan(TenantId::new("grace"), easter_day(), "easter", &[]).unwrap();

    assert_eq!(plan.title, "Easter Sunday");
    assert_eq!(plan.scripture.as_deref(), Some("Matthew 28:1-10"));
    assert_eq!(plan.template_id.as_deref(), Some("easter"));
    assert_eq!(plan.tenant_id.as_str(), "grace");
    assert_eq!(plan.date, easter_day());

    let titles: Vec<&str> = plan.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles.first(), Some(&"Opening"));
    assert_eq!(titles.last(), Some(&"Benediction"));
    let benediction = plan.sections.last().unwrap();
    assert_eq!(benediction.song_ids, vec![SongId::new("doxology")]);
}

#[test]
fn test_explicit_selection_skips_unknown_sections() {
    let plan = build_plan(
        TenantId::new("grace"),
        easter_day(),
        "prayer-meeting",
        &["worship", "no-such-section", "sermon"],
    )
    .unwrap();

    let titles: Vec<&str> = plan.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Worship", "Sermon"]);
    assert_eq!(plan.sections[1].person.as_deref(), Some("Pastor"));
    assert_eq!(plan.notes.as_deref(), Some("Collect prayer requests beforehand"));
}

#[test]
fn test_unknown_service_template_is_not_found() {
    let err = build_plan(TenantId::new("grace"), easter_day(), "harvest", &[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_seeded_plans_get_distinct_ids() {
    let first = build_plan(TenantId::new("grace"), easter_day(), "communion", &[]).unwrap();
    let second = build_plan(TenantId::new("grace"), easter_day(), "communion", &[]).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_every_service_template_references_known_sections() {
    for service in service_templates::all() {
        for id in service.section_ids {
            assert!(
                section_templates::find(id).is_some(),
                "{} references unknown section {id}",
                service.id
            );
        }
    }
}

#[test]
fn test_sample_plan_agenda_orders_by_time() {
    let snapshot = common::sample_snapshot();
    let items = agenda(&snapshot.plans[0]);

    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, ["Opening", "Praise", "Sermon", "Announcements"]);

    assert_eq!(items[0].end.as_deref(), Some("09:05"));
    assert_eq!(items[1].start.as_deref(), Some("09:05"));
    assert_eq!(items[1].start_label.as_deref(), Some("9:05 AM"));
    assert_eq!(items[2].end.as_deref(), Some("10:50"));
    assert!(items[3].start.is_none());

    assert_eq!(items[0].color, palette::OPENING);
    assert_eq!(items[2].color, palette::TRANSPARENT);
}

#[test]
fn test_section_colors_ignore_case_and_spacing() {
    assert_eq!(color_for(" Altar  Call "), color_for("altarcall"));
    assert_ne!(color_for("Altar Call"), palette::TRANSPARENT);
    assert_eq!(color_for("PRAISE"), palette::PRAISE);
    assert_eq!(color_for("Coffee"), palette::TRANSPARENT);
}

#[test]
fn test_time_format_examples() {
    assert!(time_format::is_valid("23:59"));
    assert!(!time_format::is_valid("24:00"));
    assert!(!time_format::is_valid("9:30"));

    assert_eq!(time_format::normalize("9:5"), "09:05");
    assert_eq!(time_format::normalize("09:30:00"), "09:30:00");

    assert_eq!(time_format::format_for_display("00:15"), "12:15 AM");
    assert_eq!(time_format::format_for_display("12:00"), "12:00 PM");
    assert_eq!(time_format::format_for_display("13:30"), "1:30 PM");
    assert_eq!(time_format::format_for_display("noon"), "noon");
}
