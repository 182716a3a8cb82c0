//! Shared utilities for integration tests.

pub mod harness;

use serde_json::Value;

/// Reads a slot file written by the binary and parses it as JSON.
///
/// # Panics
///
/// Panics if the file cannot be read or is not JSON.
pub fn read_slot(path: &std::path::Path) -> Value {
    let contents = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read slot {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("Slot {} is not JSON: {}", path.display(), e))
}
