//! Scheduled scalar producer.

use crate::component::Component;
use crate::error::ComponentResult;
use hestia_core::{LoadType, OutputId, Unit};
use hestia_graph::{PortRegistry, StepValues};

/// Emits a precomputed per-timestep profile on a single output port.
///
/// Timesteps past the end of the profile emit `default_value`, so a
/// constant feed is just an empty profile. Serves as the upstream
/// producer for any wired input: heat delivery, outdoor temperature,
/// tariff signals.
#[derive(Debug)]
pub struct ScheduleSource {
    name: String,
    profile: Vec<f64>,
    default_value: f64,
    output: OutputId,
}

impl ScheduleSource {
    pub const OUTPUT: &'static str = "Output";

    pub fn new(
        name: impl Into<String>,
        registry: &mut PortRegistry,
        load_type: LoadType,
        unit: Unit,
        profile: Vec<f64>,
        default_value: f64,
    ) -> Self {
        let name = name.into();
        let output = registry.register_output(&name, Self::OUTPUT, load_type, unit);
        Self {
            name,
            profile,
            default_value,
            output,
        }
    }

    /// A source emitting the same value on every timestep.
    pub fn constant(
        name: impl Into<String>,
        registry: &mut PortRegistry,
        load_type: LoadType,
        unit: Unit,
        value: f64,
    ) -> Self {
        Self::new(name, registry, load_type, unit, Vec::new(), value)
    }

    pub fn output_port(&self) -> OutputId {
        self.output
    }
}

impl Component for ScheduleSource {
    fn name(&self) -> &str {
        &self.name
    }

    // No carried-forward state.
    fn save_state(&mut self) {}

    fn restore_state(&mut self) {}

    fn simulate(
        &mut self,
        timestep: usize,
        values: &mut StepValues,
        _seconds_per_timestep: u64,
        _force_convergence: bool,
    ) -> ComponentResult<()> {
        let value = self
            .profile
            .get(timestep)
            .copied()
            .unwrap_or(self.default_value);
        values.set_output(self.output, value);
        Ok(())
    }

    fn write_to_report(&self) -> Vec<String> {
        vec![format!(
            "{} scheduled values, default {} past the end",
            self.profile.len(),
            self.default_value
        )]
    }
}
