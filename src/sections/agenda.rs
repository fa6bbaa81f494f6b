// ABOUTME: Display agenda for a service plan with time-ordered, colored sections
// ABOUTME: Valid start times sort first; untimed or malformed sections keep their order after
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::{Duration, NaiveTime};
use serde::Serialize;
use tracing::debug;

use super::colors::color_for;
use crate::models::{Section, ServicePlan};
use crate::time_format;

/// One section of a plan rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    /// Start as `HH:mm`; malformed entries are normalized best-effort
    pub start: Option<String>,
    /// Start on the 12-hour clock, or the raw text if it is not a valid time
    pub start_label: Option<String>,
    /// End as `HH:mm` when start and duration are both known
    pub end: Option<String>,
    /// Section title
    pub title: String,
    /// Display color derived from the title
    pub color: &'static str,
    /// Person leading the section
    pub person: Option<String>,
    /// Notes
    pub notes: Option<String>,
    /// Planned minutes
    pub duration_minutes: Option<u32>,
}

impl AgendaItem {
    fn from_section(section: &Section) -> Self {
        let start = section.start_time.as_deref().map(time_format::normalize);
        let start_label = start.as_deref().map(time_format::format_for_display);
        let end = start
            .as_deref()
            .and_then(time_format::parse)
            .zip(section.duration_minutes)
            .map(|(begin, minutes)| end_of(begin, minutes));

        Self {
            start,
            start_label,
            end,
            title: section.title.clone(),
            color: color_for(&section.title),
            person: section.person.clone(),
            notes: section.notes.clone(),
            duration_minutes: section.duration_minutes,
        }
    }
}

/// `begin + minutes`, wrapping past midnight
fn end_of(begin: NaiveTime, minutes: u32) -> String {
    let (end, _) = begin.overflowing_add_signed(Duration::minutes(i64::from(minutes)));
    end.format("%H:%M").to_string()
}

/// Sections in display order
///
/// Sections whose start normalizes to a valid time are ordered by that time
/// (stable for equal times); the rest follow in their stored order.
#[must_use]
pub fn agenda(plan: &ServicePlan) -> Vec<AgendaItem> {
    let mut keyed: Vec<(Option<NaiveTime>, AgendaItem)> = plan
        .sections
        .iter()
        .map(|section| {
            let item = AgendaItem::from_section(section);
            let sort_key = item.start.as_deref().and_then(time_format::parse);
            (sort_key, item)
        })
        .collect();

    // None sorts after every Some; sort_by_key is stable
    keyed.sort_by_key(|(time, _)| (time.is_none(), *time));

    debug!(
        plan_id = %plan.id,
        sections = keyed.len(),
        "Built service plan agenda"
    );

    keyed.into_iter().map(|(_, item)| item).collect()
}
