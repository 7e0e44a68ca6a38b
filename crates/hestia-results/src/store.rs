//! Run storage API.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{RunManifest, StoredRun};
use crate::{ResultsError, ResultsResult};

/// Filesystem store holding one JSON file per run, keyed by run id.
#[derive(Debug, Clone)]
pub struct RunStore {
    root_dir: PathBuf,
}

impl RunStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> ResultsResult<Self> {
        let root_dir = root_dir.into();
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn run_path(&self, run_id: &str) -> PathBuf {
        self.root_dir.join(format!("{run_id}.json"))
    }

    pub fn has_run(&self, run_id: &str) -> bool {
        self.run_path(run_id).exists()
    }

    pub fn save_run(&self, run: &StoredRun) -> ResultsResult<()> {
        let content = serde_json::to_string_pretty(run)?;
        fs::write(self.run_path(&run.manifest.run_id), content)?;
        Ok(())
    }

    pub fn load_run(&self, run_id: &str) -> ResultsResult<StoredRun> {
        let path = self.run_path(run_id);
        if !path.exists() {
            return Err(ResultsError::RunNotFound {
                run_id: run_id.to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Manifests of every readable run in the store, unordered.
    pub fn list_runs(&self) -> ResultsResult<Vec<RunManifest>> {
        let mut runs = Vec::new();
        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "json")
                && let Ok(content) = fs::read_to_string(&path)
                && let Ok(run) = serde_json::from_str::<StoredRun>(&content)
            {
                runs.push(run.manifest);
            }
        }
        Ok(runs)
    }
}
