// ABOUTME: Set-list export and song suggestion commands for worship-cli
// ABOUTME: Renders export rows as a table or JSON and ranks songs from recent set-lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use worship_planner::{
    config::PlannerConfig,
    errors::{AppError, AppResult},
    models::{SetListId, TenantId},
    scheduling::{ExportRow, SetListEngine, SongSuggestionEngine},
    store::Snapshot,
};

use crate::helpers::display::render_table;
use crate::OutputFormat;

/// Print the materialized rows of one set-list
pub fn set_list(
    snapshot: &Snapshot,
    config: &PlannerConfig,
    id: &str,
    format: OutputFormat,
) -> AppResult<()> {
    let set_list = snapshot
        .set_list(&SetListId::new(id))
        .ok_or_else(|| AppError::not_found(format!("set-list '{id}'")))?;
    let rows = SetListEngine::from_config(config).materialize(set_list, &snapshot.songs);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let cells: Vec<[String; 4]> = rows.iter().map(ExportRow::to_cells).collect();
            print!("{}", render_table(&ExportRow::headers(), &cells));
        }
    }
    Ok(())
}

/// Print songs ranked by use in the configured window of recent set-lists
pub fn suggest(
    snapshot: &Snapshot,
    config: &PlannerConfig,
    limit: Option<usize>,
    tenant: Option<&str>,
) {
    let tenant_id = tenant.map(TenantId::new);
    let recent = snapshot.recent_set_lists(tenant_id.as_ref(), config.suggestion_window);
    let engine = limit.map_or_else(
        || SongSuggestionEngine::from_config(config),
        SongSuggestionEngine::new,
    );
    let songs = engine.suggest(&recent, &snapshot.songs);

    if songs.is_empty() {
        println!("No suggestions from the last {} set-lists", recent.len());
        return;
    }
    for (rank, song) in songs.iter().enumerate() {
        match &song.artist {
            Some(artist) => println!("{:>2}. {} ({artist})", rank + 1, song.title),
            None => println!("{:>2}. {}", rank + 1, song.title),
        }
    }
}
