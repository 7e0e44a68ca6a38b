//! Host engine: fixed-order timestep loop with iterative convergence.

use tracing::{debug, info, trace};

use crate::error::{SimError, SimResult};
use crate::record::{OutputColumn, SimRecord};
use hestia_components::Component;
use hestia_core::{SimulationParameters, Tolerances};
use hestia_graph::{StepValues, Wiring};

/// Convergence policy for the per-timestep fixed-point iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverOptions {
    /// Maximum simulate attempts per timestep. The final attempt runs
    /// with the force-convergence flag raised and is always accepted.
    pub max_iterations: usize,
    /// Tolerances for the value-vector fixed-point test.
    pub tolerances: Tolerances,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            tolerances: Tolerances::default(),
        }
    }
}

/// Drives a set of components through every timestep of a run.
///
/// Components simulate in registration order; register producers before
/// their consumers. Feedback loops are resolved by re-running the whole
/// set until the shared value vector reaches a fixed point, with
/// `save_state`/`restore_state` bracketing each rejected attempt.
pub struct Simulator {
    parameters: SimulationParameters,
    wiring: Wiring,
    components: Vec<Box<dyn Component>>,
    options: SolverOptions,
}

struct StepOutcome {
    iterations: usize,
    forced: bool,
}

impl Simulator {
    pub fn new(parameters: SimulationParameters, wiring: Wiring) -> Self {
        Self {
            parameters,
            wiring,
            components: Vec::new(),
            options: SolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Add a component; simulation order is registration order.
    pub fn add_component(&mut self, component: Box<dyn Component>) {
        self.components.push(component);
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Each component's name with its report lines, for the run report.
    pub fn collect_report(&self) -> Vec<(String, Vec<String>)> {
        self.components
            .iter()
            .map(|c| (c.name().to_string(), c.write_to_report()))
            .collect()
    }

    /// Run every timestep and record all output columns.
    pub fn run(&mut self) -> SimResult<SimRecord> {
        if self.options.max_iterations == 0 {
            return Err(SimError::InvalidArg {
                what: "max_iterations must be positive",
            });
        }
        if self.components.is_empty() {
            return Err(SimError::InvalidArg {
                what: "no components registered",
            });
        }

        let timestep_count = self.parameters.timestep_count();
        let seconds_per_timestep = self.parameters.seconds_per_timestep;
        let columns: Vec<OutputColumn> = self
            .wiring
            .outputs()
            .iter()
            .map(|o| OutputColumn {
                component: o.component.clone(),
                port: o.name.clone(),
                load_type: o.load_type,
                unit: o.unit,
            })
            .collect();

        info!(
            timesteps = timestep_count,
            seconds_per_timestep,
            components = self.components.len(),
            "starting run"
        );

        let mut values = self.wiring.new_step_values();
        let mut rows = Vec::with_capacity(timestep_count);
        let mut forced_timesteps = 0;

        for timestep in 0..timestep_count {
            // The value vector is scoped to one timestep.
            values.reset();
            let outcome = self.advance_timestep(timestep, &mut values, seconds_per_timestep)?;
            if outcome.forced {
                forced_timesteps += 1;
            } else {
                trace!(timestep, iterations = outcome.iterations, "timestep converged");
            }

            for component in &self.components {
                component.doublecheck(timestep, &values);
            }
            rows.push(values.as_slice().to_vec());
        }

        info!(forced_timesteps, "run finished");
        Ok(SimRecord {
            columns,
            rows,
            forced_timesteps,
        })
    }

    /// One timestep: checkpoint, then attempt until the value vector
    /// reaches a fixed point or the attempt budget runs out.
    fn advance_timestep(
        &mut self,
        timestep: usize,
        values: &mut StepValues,
        seconds_per_timestep: u64,
    ) -> SimResult<StepOutcome> {
        for component in &mut self.components {
            component.save_state();
        }

        let mut iterations = 0;
        loop {
            let force_convergence = iterations + 1 >= self.options.max_iterations;
            let before = values.clone();

            for component in &mut self.components {
                component.simulate(timestep, values, seconds_per_timestep, force_convergence)?;
            }
            iterations += 1;

            if values.nearly_equals(&before, self.options.tolerances) {
                return Ok(StepOutcome {
                    iterations,
                    forced: false,
                });
            }
            if force_convergence {
                debug!(timestep, iterations, "accepting timestep via force-convergence");
                return Ok(StepOutcome {
                    iterations,
                    forced: true,
                });
            }

            // Reject the tentative attempt and retry from the checkpoint.
            for component in &mut self.components {
                component.restore_state();
            }
        }
    }
}
