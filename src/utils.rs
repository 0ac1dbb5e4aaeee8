use std::time::Duration;

use chrono::NaiveDateTime;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::{
    config::CATEGORY_IDS,
    error::{Error, Result},
};

/// Timestamp layout accepted by the featured playlists endpoint.
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn check_range(name: &str, value: u32, min: u32, max: u32) -> Result<()> {
    if value < min || value > max {
        return Err(Error::invalid(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

pub fn check_item_count(name: &str, count: usize, max: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::invalid(format!("{} must not be empty", name)));
    }
    if count > max {
        return Err(Error::invalid(format!(
            "at most {} {} per request, got {}",
            max, name, count
        )));
    }
    Ok(())
}

/// Country and market codes are ISO 3166-1 alpha-2, e.g. `US`.
pub fn check_country(code: &str) -> Result<()> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        return Ok(());
    }
    Err(Error::invalid(format!(
        "{:?} is not an ISO 3166-1 alpha-2 country code",
        code
    )))
}

pub fn check_category(category_id: &str) -> Result<()> {
    if CATEGORY_IDS.contains(&category_id) {
        return Ok(());
    }
    Err(Error::invalid(format!(
        "{:?} is not a known category. Use one of: {}",
        category_id,
        CATEGORY_IDS.join(", ")
    )))
}

pub fn check_timestamp(timestamp: &str) -> Result<()> {
    NaiveDateTime::parse_from_str(timestamp, ISO_8601_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            Error::invalid(format!(
                "timestamp {:?} must look like 2014-10-23T09:00:00",
                timestamp
            ))
        })
}

pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter()
        .map(|id| id.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Follows `path` through nested objects and returns the array found there.
///
/// Missing keys or a non-array leaf yield an empty vector.
pub fn extract_list(value: &Value, path: &[&str]) -> Vec<Value> {
    path.iter()
        .try_fold(value, |node, key| node.get(key))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Formats a track length as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
