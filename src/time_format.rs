// ABOUTME: 24-hour time string validation, normalization, and 12-hour display rendering
// ABOUTME: Total functions over free-text section times; malformed input passes through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

//! Section start times are typed by planners, so nothing here fails: invalid
//! strings are reported through [`is_valid`] or returned unchanged.

use chrono::NaiveTime;

/// Split `HH:mm` into numeric hour and minute if the shape and ranges are valid
fn parse_parts(time: &str) -> Option<(u32, u32)> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let digits_ok = bytes[..2]
        .iter()
        .chain(&bytes[3..])
        .all(u8::is_ascii_digit);
    if !digits_ok {
        return None;
    }
    let hour = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
    let minute = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');
    (hour <= 23 && minute <= 59).then_some((hour, minute))
}

/// True iff `time` is exactly two digits, a colon, two digits, with hour 0-23 and minute 0-59
#[must_use]
pub fn is_valid(time: &str) -> bool {
    parse_parts(time).is_some()
}

/// Left-pad both parts of a colon-separated time to two digits
///
/// `"9:5"` becomes `"09:05"`. Input that does not split into exactly two
/// parts is returned unchanged. Parts are not range-checked.
#[must_use]
pub fn normalize(time: &str) -> String {
    let parts: Vec<&str> = time.split(':').collect();
    match parts.as_slice() {
        [hour, minute] => format!("{hour:0>2}:{minute:0>2}"),
        _ => time.to_owned(),
    }
}

/// Render a valid `HH:mm` time on the 12-hour clock (`"13:30"` becomes `"1:30 PM"`)
///
/// Hours 0 and 12 both display as 12. Invalid input is returned unchanged.
#[must_use]
pub fn format_for_display(time: &str) -> String {
    let Some((hour, minute)) = parse_parts(time) else {
        return time.to_owned();
    };
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hour}:{minute:02} {suffix}")
}

/// Parse a valid `HH:mm` time for ordering and arithmetic
#[must_use]
pub fn parse(time: &str) -> Option<NaiveTime> {
    parse_parts(time).and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
}
