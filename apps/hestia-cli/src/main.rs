use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use hestia_results::{ColumnMeta, RunManifest, RunStore, StoredRun, compute_run_id, render_report};
use hestia_sim::{Scenario, SimRecord};
use tracing::info;

const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "hestia-cli")]
#[command(about = "Hestia CLI - household energy asset simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file
    Run {
        /// Path to the scenario YAML file
        scenario_path: PathBuf,
        /// Results directory
        #[arg(long, default_value = ".hestia/runs")]
        out: PathBuf,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs
    ListRuns {
        /// Results directory
        #[arg(long, default_value = ".hestia/runs")]
        out: PathBuf,
    },
    /// Show details of a cached run
    ShowRun {
        /// Run ID to display
        run_id: String,
        /// Results directory
        #[arg(long, default_value = ".hestia/runs")]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            scenario_path,
            out,
            no_cache,
        } => cmd_run(&scenario_path, &out, !no_cache),
        Commands::ListRuns { out } => cmd_list_runs(&out),
        Commands::ShowRun { run_id, out } => cmd_show_run(&run_id, &out),
    }
}

fn cmd_run(scenario_path: &Path, out: &Path, use_cache: bool) -> Result<(), Box<dyn Error>> {
    let scenario = Scenario::load_yaml(scenario_path)?;
    let run_id = compute_run_id(&scenario, ENGINE_VERSION);
    let store = RunStore::new(out)?;

    if use_cache && store.has_run(&run_id) {
        info!(%run_id, "reusing cached run");
        let cached = store.load_run(&run_id)?;
        println!("Cached run found for scenario '{}'", scenario.name);
        print_summary(&cached);
        return Ok(());
    }

    let mut simulator = scenario.build()?;
    let started = Instant::now();
    let record = simulator.run()?;
    info!(elapsed_s = started.elapsed().as_secs_f64(), "simulation done");

    let manifest = RunManifest::new(
        &run_id,
        &scenario.name,
        ENGINE_VERSION,
        scenario.parameters.seconds_per_timestep,
        record.timestep_count(),
    );
    let stored = to_stored_run(manifest.clone(), &record);
    store.save_run(&stored)?;

    println!("{}", render_report(&manifest, &simulator.collect_report()));
    print_summary(&stored);
    println!("Saved to {}", store.root_dir().join(format!("{run_id}.json")).display());
    Ok(())
}

fn cmd_list_runs(out: &Path) -> Result<(), Box<dyn Error>> {
    let store = RunStore::new(out)?;
    let mut runs = store.list_runs()?;
    runs.sort_by(|a, b| a.created_at.cmp(&b.created_at));

    if runs.is_empty() {
        println!("No cached runs in {}", out.display());
        return Ok(());
    }
    for manifest in runs {
        println!(
            "{}  {}  ({} x {} s)  {}",
            &manifest.run_id[..12.min(manifest.run_id.len())],
            manifest.scenario,
            manifest.timestep_count,
            manifest.seconds_per_timestep,
            manifest.created_at,
        );
    }
    Ok(())
}

fn cmd_show_run(run_id: &str, out: &Path) -> Result<(), Box<dyn Error>> {
    let store = RunStore::new(out)?;
    let run = store.load_run(run_id)?;

    println!("Scenario:  {}", run.manifest.scenario);
    println!("Created:   {}", run.manifest.created_at);
    println!("Engine:    v{}", run.manifest.engine_version);
    println!(
        "Timesteps: {} x {} s",
        run.manifest.timestep_count, run.manifest.seconds_per_timestep
    );
    print_summary(&run);
    Ok(())
}

fn to_stored_run(manifest: RunManifest, record: &SimRecord) -> StoredRun {
    let columns = record
        .columns
        .iter()
        .map(|c| ColumnMeta {
            component: c.component.clone(),
            port: c.port.clone(),
            load_type: c.load_type.to_string(),
            unit: c.unit.to_string(),
        })
        .collect();
    StoredRun {
        manifest,
        columns,
        rows: record.rows.clone(),
    }
}

/// Final-row values of every column, the quickest health check of a run.
fn print_summary(run: &StoredRun) {
    let Some(last) = run.rows.last() else {
        println!("(run recorded no timesteps)");
        return;
    };
    println!("Final timestep:");
    for (column, value) in run.columns.iter().zip(last) {
        println!(
            "  {}.{} = {:.3} {}",
            column.component, column.port, value, column.unit
        );
    }
}
