//! Text run report.

use std::fmt::Write as _;

use crate::types::RunManifest;

/// Render the run report: a manifest header followed by every
/// component's contributed lines.
pub fn render_report(manifest: &RunManifest, component_lines: &[(String, Vec<String>)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Run report for scenario '{}'", manifest.scenario);
    let _ = writeln!(out, "run id:    {}", manifest.run_id);
    let _ = writeln!(out, "created:   {}", manifest.created_at);
    let _ = writeln!(out, "engine:    v{}", manifest.engine_version);
    let _ = writeln!(
        out,
        "timesteps: {} x {} s",
        manifest.timestep_count, manifest.seconds_per_timestep
    );

    for (name, lines) in component_lines {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{name}]");
        if lines.is_empty() {
            let _ = writeln!(out, "  (no report entries)");
        } else {
            for line in lines {
                let _ = writeln!(out, "  {line}");
            }
        }
    }

    out
}
