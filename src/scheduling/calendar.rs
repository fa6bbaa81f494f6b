// ABOUTME: Calendar day bucketing for agenda and month views
// ABOUTME: Groups events and plans under YYYY-MM-DD keys, preserving supplied order per day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use chrono::NaiveDate;
use tracing::debug;

use crate::constants::scheduling::DAY_KEY_FORMAT;
use crate::models::{Event, ServicePlan};
use crate::utils::InsertionOrderedMap;

/// Items bucketed by calendar day
///
/// Days iterate in the order they were first seen; items within a day keep
/// the order they were supplied in. Chronological ordering is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct DayGroups<T> {
    days: InsertionOrderedMap<String, Vec<T>>,
}

impl<T> Default for DayGroups<T> {
    fn default() -> Self {
        Self {
            days: InsertionOrderedMap::new(),
        }
    }
}

impl<T> DayGroups<T> {
    fn push(&mut self, day: NaiveDate, item: T) {
        self.days
            .entry_or_insert_with(day_key(day), Vec::new)
            .push(item);
    }

    /// Items on the day with key `YYYY-MM-DD`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[T]> {
        self.days.get(key).map(Vec::as_slice)
    }

    /// Day keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// `(day key, items)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.days
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    /// Number of distinct days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no items were grouped
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Canonical `YYYY-MM-DD` lookup key for a calendar date
#[must_use]
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}

/// Bucket events by the calendar date of their wall-clock start
///
/// Time of day is discarded, so a morning and an evening event on the same
/// date share a bucket.
#[must_use]
pub fn group_by_day(events: &[Event]) -> DayGroups<Event> {
    let mut groups = DayGroups::default();
    for event in events {
        groups.push(event.starts_at.date(), event.clone());
    }
    debug!(events = events.len(), days = groups.len(), "Grouped events by day");
    groups
}

/// Bucket service plans by their service date
#[must_use]
pub fn group_plans_by_day(plans: &[ServicePlan]) -> DayGroups<ServicePlan> {
    let mut groups = DayGroups::default();
    for plan in plans {
        groups.push(plan.date, plan.clone());
    }
    debug!(plans = plans.len(), days = groups.len(), "Grouped service plans by day");
    groups
}
