// ABOUTME: Integration tests for set-list export, song suggestions, and calendar grouping
// ABOUTME: Runs the engines over the sample snapshot and checks ordering and placeholder rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::HashMap;

use worship_planner::config::PlannerConfig;
use worship_planner::models::{
    Event, SetList, SetListId, SetListSongEntry, Song, SongId, TenantId, UserId,
};
use worship_planner::scheduling::{
    group_by_day, group_plans_by_day, materialize, rank, suggest, DayGroups, ExportRow,
    SetListEngine, SongSuggestionEngine,
};
use worship_planner::sections::agenda;

fn day_ids(groups: &DayGroups<Event>) -> Vec<(String, Vec<String>)> {
    groups
        .iter()
        .map(|(day, events)| {
            (
                day.to_owned(),
                events.iter().map(|event| event.id.as_str().to_owned()).collect(),
            )
        })
        .collect()
}

#[test]
fn test_export_rows_follow_entry_order() {
    let snapshot = common::sample_snapshot();
    let set_list = snapshot.set_list(&SetListId::new("march-03")).unwrap();

    let rows = materialize(set_list, &snapshot.songs);

    assert_eq!(
        rows,
        vec![
            ExportRow {
                position: 1,
                title: "Amazing Grace".to_owned(),
                key: "G".to_owned(),
                notes: "Capo 2".to_owned(),
            },
            ExportRow {
                position: 2,
                title: "Cornerstone".to_owned(),
                key: "C".to_owned(),
                notes: String::new(),
            },
        ]
    );
}

#[test]
fn test_dangling_song_gets_placeholder_title() {
    let snapshot = common::sample_snapshot();
    let set_list = snapshot.set_list(&SetListId::new("march-10")).unwrap();

    let rows = materialize(set_list, &snapshot.songs);

    assert_eq!(rows.len(), set_list.entries.len());
    assert_eq!(rows[1].title, "Unknown");
    assert_eq!(rows[1].key, "D");
}

#[test]
fn test_placeholder_title_is_configurable() {
    let snapshot = common::sample_snapshot();
    let set_list = snapshot.set_list(&SetListId::new("march-10")).unwrap();
    let config = PlannerConfig {
        unknown_song_title: "(removed)".to_owned(),
        ..PlannerConfig::default()
    };

    let rows = SetListEngine::from_config(&config).materialize(set_list, &snapshot.songs);
    assert_eq!(rows[1].title, "(removed)");
}

#[test]
fn test_equal_orders_keep_stored_sequence_with_map_catalog() {
    let catalog: HashMap<SongId, Song> = [Song::new("a", "Alpha"), Song::new("b", "Beta")]
        .into_iter()
        .map(|song| (song.id.clone(), song))
        .collect();
    let set_list = SetList::new(
        "tie",
        "grace",
        vec![
            SetListSongEntry::new("b", "E", 5),
            SetListSongEntry::new("a", "F", 5),
            SetListSongEntry::new("a", "D", -1),
        ],
    );

    let rows = materialize(&set_list, &catalog);
    let cells: Vec<[String; 4]> = rows.iter().map(ExportRow::to_cells).collect();
    assert_eq!(cells[0], ["1", "Alpha", "D", ""].map(str::to_owned));
    assert_eq!(cells[1][1], "Beta");
    assert_eq!(cells[2][1], "Alpha");
    assert_eq!(ExportRow::headers(), ["#", "Title", "Key", "Notes"]);
}

#[test]
fn test_suggestions_from_recent_window() {
    let snapshot = common::sample_snapshot();
    let grace = TenantId::new("grace");
    let recent = snapshot.recent_set_lists(Some(&grace), 8);
    assert_eq!(recent[0].id.as_str(), "march-10");

    let ranked = rank(&recent);
    assert_eq!(ranked[0].song_id.as_str(), "amazing-grace");
    assert_eq!(ranked[0].count, 2);

    let songs = suggest(&recent, &snapshot.songs, 10);
    let titles: Vec<&str> = songs.iter().map(|song| song.title.as_str()).collect();
    // retired-song is ranked but dropped during resolution
    assert_eq!(titles, ["Amazing Grace", "Doxology", "Cornerstone"]);
}

#[test]
fn test_suggestion_limit_counts_dangling_ids() {
    let snapshot = common::sample_snapshot();
    let recent = snapshot.recent_set_lists(Some(&TenantId::new("grace")), 1);

    let songs = SongSuggestionEngine::new(2).suggest(&recent, &snapshot.songs);
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].id.as_str(), "amazing-grace");
    assert!(suggest(&recent, &snapshot.songs, 0).is_empty());
}

#[test]
fn test_calendar_groups_by_wall_clock_date() {
    let snapshot = common::sample_snapshot();
    let groups = group_by_day(&snapshot.events);

    assert_eq!(groups.keys().collect::<Vec<_>>(), ["2024-03-10", "2024-03-12"]);
    let sunday: Vec<&str> = groups
        .get("2024-03-10")
        .unwrap()
        .iter()
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(sunday, ["e-evening", "e-sunday"]);
    assert!(groups.get("2024-03-11").is_none());
}

#[test]
fn test_calendar_tenant_filter_and_plans() {
    let snapshot = common::sample_snapshot();
    let hope = snapshot.events_for(Some(&TenantId::new("hope")));
    let groups = group_by_day(&hope);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.get("2024-03-12").unwrap()[0].title, "Rehearsal");

    let plans = group_plans_by_day(&snapshot.plans);
    assert_eq!(plans.get("2024-03-10").unwrap()[0].title, "Sunday Morning");
}

#[tokio::test]
async fn test_engines_are_idempotent_over_the_same_snapshot() {
    let snapshot = common::sample_snapshot();
    let grace = TenantId::new("grace");
    let set_list = snapshot.set_list(&SetListId::new("march-10")).unwrap();
    let recent = snapshot.recent_set_lists(Some(&grace), 8);

    assert_eq!(
        materialize(set_list, &snapshot.songs),
        materialize(set_list, &snapshot.songs)
    );
    assert_eq!(rank(&recent), rank(&recent));
    assert_eq!(
        suggest(&recent, &snapshot.songs, 10),
        suggest(&recent, &snapshot.songs, 10)
    );

    let first = day_ids(&group_by_day(&snapshot.events));
    assert_eq!(first, day_ids(&group_by_day(&snapshot.events)));
    assert_eq!(first.len(), 2);

    let resolver = common::sample_resolver();
    let ana = UserId::new("u-ana");
    let roles = resolver.resolve_roles(&ana, &grace).await.unwrap();
    assert_eq!(roles, resolver.resolve_roles(&ana, &grace).await.unwrap());
    assert!(!roles.is_empty());

    let plan = &snapshot.plans[0];
    assert_eq!(agenda(plan), agenda(plan));
    assert_eq!(agenda(plan).len(), plan.sections.len());
}
