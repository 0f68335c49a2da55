//! Environment variable parsing with warn-and-default semantics.
//!
//! Configuration in this workspace is read straight from the environment. A missing variable
//! falls back to its documented default silently; a variable that is *present but unparseable*
//! logs a warning and then falls back, so a typo in deployment config never takes the process
//! down.

use std::env;

use log::warn;

/// Reads a boolean from the environment. Accepts `1`, `true`, `yes` and `y` (any case) as true;
/// everything else present counts as false.
pub fn env_bool(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(s) => matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "y"),
        Err(_) => default,
    }
}

pub fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|e| warn!("🪛️ {s} is not a valid value for {name}. {e}. Using {default} instead."))
                .ok()
        })
        .unwrap_or(default)
}

pub fn env_i64(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|s| {
            s.trim()
                .parse::<i64>()
                .map_err(|e| warn!("🪛️ {s} is not a valid value for {name}. {e}. Using {default} instead."))
                .ok()
        })
        .unwrap_or(default)
}
