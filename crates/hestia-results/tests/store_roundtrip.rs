//! Save/load round trip for the run store.

use std::path::PathBuf;

use hestia_results::{ColumnMeta, RunManifest, RunStore, StoredRun, compute_run_id};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("{}_{}", prefix, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn sample_run(run_id: &str) -> StoredRun {
    StoredRun {
        manifest: RunManifest::new(run_id, "day", "0.1.0", 60, 2),
        columns: vec![
            ColumnMeta {
                component: "Building".to_string(),
                port: "StoredEnergy".to_string(),
                load_type: "Heating".to_string(),
                unit: "W".to_string(),
            },
            ColumnMeta {
                component: "Building".to_string(),
                port: "Residence Temperature".to_string(),
                load_type: "Temperature".to_string(),
                unit: "°C".to_string(),
            },
        ],
        rows: vec![vec![1_626_110.1, 25.0], vec![1_631_110.1, 25.9]],
    }
}

#[test]
fn save_and_load_run() {
    let store = RunStore::new(unique_temp_dir("hestia_results_roundtrip")).unwrap();

    let run = sample_run("run_abc");
    assert!(!store.has_run("run_abc"));
    store.save_run(&run).unwrap();
    assert!(store.has_run("run_abc"));

    let loaded = store.load_run("run_abc").unwrap();
    assert_eq!(loaded, run);
}

#[test]
fn missing_run_is_reported() {
    let store = RunStore::new(unique_temp_dir("hestia_results_missing")).unwrap();
    let err = store.load_run("nope").unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn list_runs_sees_every_saved_run() {
    let store = RunStore::new(unique_temp_dir("hestia_results_list")).unwrap();
    store.save_run(&sample_run("run_one")).unwrap();
    store.save_run(&sample_run("run_two")).unwrap();

    let mut ids: Vec<String> = store
        .list_runs()
        .unwrap()
        .into_iter()
        .map(|m| m.run_id)
        .collect();
    ids.sort();
    assert_eq!(ids, ["run_one", "run_two"]);
}

#[test]
fn run_id_doubles_as_cache_key() {
    #[derive(serde::Serialize)]
    struct Key<'a> {
        name: &'a str,
        watts: f64,
    }

    let store = RunStore::new(unique_temp_dir("hestia_results_cache")).unwrap();
    let key = Key {
        name: "day",
        watts: 5000.0,
    };
    let run_id = compute_run_id(&key, "0.1.0");

    assert!(!store.has_run(&run_id));
    store.save_run(&sample_run(&run_id)).unwrap();
    assert!(store.has_run(&compute_run_id(&key, "0.1.0")));
}
