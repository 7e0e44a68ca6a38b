//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub scenario: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    pub engine_version: String,
    pub seconds_per_timestep: u64,
    pub timestep_count: usize,
}

impl RunManifest {
    pub fn new(
        run_id: impl Into<RunId>,
        scenario: impl Into<String>,
        engine_version: impl Into<String>,
        seconds_per_timestep: u64,
        timestep_count: usize,
    ) -> Self {
        Self {
            run_id: run_id.into(),
            scenario: scenario.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
            engine_version: engine_version.into(),
            seconds_per_timestep,
            timestep_count,
        }
    }
}

/// Metadata of one stored column. Load type and unit are kept as display
/// strings so stored runs stay readable without the engine's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub component: String,
    pub port: String,
    pub load_type: String,
    pub unit: String,
}

/// A complete persisted run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRun {
    pub manifest: RunManifest,
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<f64>>,
}
