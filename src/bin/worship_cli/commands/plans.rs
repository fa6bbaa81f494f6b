// ABOUTME: Calendar, agenda, plan seeding, template listing, and time commands for worship-cli
// ABOUTME: Thin wrappers that print the output of the scheduling and template engines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::NaiveDate;
use worship_planner::{
    errors::{AppError, AppResult},
    models::{PlanId, TenantId},
    scheduling::group_by_day,
    sections::agenda as plan_agenda,
    store::Snapshot,
    templates::{build_plan, section_templates, service_templates},
    time_format,
};

/// Print events grouped by day, chronological within each day
pub fn calendar(snapshot: &Snapshot, tenant: Option<&str>) {
    let tenant_id = tenant.map(TenantId::new);
    let mut events = snapshot.events_for(tenant_id.as_ref());
    events.sort_by_key(|event| event.starts_at);

    let groups = group_by_day(&events);
    if groups.is_empty() {
        println!("No events");
        return;
    }
    for (day, items) in groups.iter() {
        println!("{day}");
        for event in items {
            let location = event
                .location
                .as_deref()
                .map(|place| format!(" @ {place}"))
                .unwrap_or_default();
            println!(
                "  {} {}{location}",
                event.starts_at.format("%H:%M"),
                event.title
            );
        }
    }
}

/// Print the time-ordered agenda of one plan
pub fn agenda(snapshot: &Snapshot, plan: &str) -> AppResult<()> {
    let plan_id = PlanId::new(plan);
    let plan = snapshot
        .plans
        .iter()
        .find(|candidate| candidate.id == plan_id)
        .ok_or_else(|| AppError::not_found(format!("service plan '{plan_id}'")))?;

    println!("{} ({})", plan.title, plan.date);
    for item in plan_agenda(plan) {
        let when = match (&item.start_label, &item.end) {
            (Some(start), Some(end)) => format!("{start} - {end}"),
            (Some(start), None) => start.clone(),
            _ => "--".to_owned(),
        };
        let person = item
            .person
            .as_deref()
            .map(|name| format!(" [{name}]"))
            .unwrap_or_default();
        println!("  {when:<18} {}{person}  {}", item.title, item.color);
    }
    Ok(())
}

/// Print a plan seeded from templates as JSON
pub fn seed(
    tenant: &str,
    date: NaiveDate,
    template: &str,
    sections: &[String],
) -> AppResult<()> {
    let section_ids: Vec<&str> = sections.iter().map(String::as_str).collect();
    let plan = build_plan(TenantId::new(tenant), date, template, &section_ids)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

/// Print the section and service template catalogs
pub fn templates() {
    println!("Section templates:");
    for template in section_templates::all() {
        println!("  {:<18} {}", template.id, template.title);
    }
    println!("Service templates:");
    for template in service_templates::all() {
        println!(
            "  {:<18} {} ({} sections)",
            template.id,
            template.name,
            template.section_ids.len()
        );
    }
}

/// Print validity, normalized form, and display form of a time
pub fn time(value: &str) {
    let normalized = time_format::normalize(value);
    println!("Input:      {value}");
    println!("Valid:      {}", time_format::is_valid(value));
    println!("Normalized: {normalized}");
    println!("Display:    {}", time_format::format_for_display(&normalized));
}
