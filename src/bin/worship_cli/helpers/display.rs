// ABOUTME: Output formatting helpers for worship-cli
// ABOUTME: Aligned text tables and comma-joined value lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::fmt::{Display, Write};

/// Comma-joined values, or `(none)` when empty
pub fn join_or_none<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let joined = values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_owned()
    } else {
        joined
    }
}

/// Left-aligned columns sized to the widest cell, with a rule under the header
pub fn render_table<const N: usize>(headers: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    write_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", line.trim_end());
}
