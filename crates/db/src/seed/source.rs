//! Loading of optional seed files.

use std::path::Path;

use serde_json::Value;

/// Read `path` as a JSON array of records.
///
/// Returns `None` when the source is unusable for any reason: missing,
/// unreadable, not JSON, or not an array at the top level. Each case is
/// logged; none is an error.
pub fn load_records(path: &Path) -> Option<Vec<Value>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Seed file not found");
            return None;
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read seed file");
            return None;
        }
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Array(records)) => Some(records),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Seed file top level is not an array");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Seed file is not valid JSON");
            None
        }
    }
}
