//! Content-based hashing for run IDs.

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Derive a stable run id from the serialized scenario and the engine
/// version. Identical inputs always hash to the same id, which is what
/// makes the run store usable as a cache.
pub fn compute_run_id<S: Serialize>(scenario: &S, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    let scenario_json = serde_json::to_string(scenario).unwrap_or_default();
    hasher.update(scenario_json.as_bytes());
    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
