//! The component lifecycle contract.

use crate::error::ComponentResult;
use hestia_graph::StepValues;

/// Lifecycle surface of one simulated unit.
///
/// The host engine owns a collection of `Box<dyn Component>` and drives
/// every variant through this trait, never through concrete types. Ports
/// are declared once at construction time against a `PortRegistry`; from
/// then on the engine calls `simulate` each timestep, possibly several
/// times while its solver iterates to a fixed point, bracketing repeated
/// attempts with `save_state`/`restore_state`.
///
/// Ordering guarantees belong to the host: a component may assume its
/// wired inputs were produced earlier in the current attempt (or are 0.0
/// on the first attempt of a feedback loop) and must write only its own
/// declared outputs.
pub trait Component {
    /// Component name, unique within one simulation setup.
    fn name(&self) -> &str;

    /// Checkpoint carried-forward state. Called by the host before a
    /// tentative attempt that it may later discard.
    fn save_state(&mut self);

    /// Roll carried-forward state back to the last checkpoint, discarding
    /// the update of a rejected attempt. Repeated restores without an
    /// intervening save are safe no-ops.
    fn restore_state(&mut self);

    /// Advance one timestep: read declared inputs from `values`, update
    /// internal state, write declared outputs back into `values`.
    ///
    /// `seconds_per_timestep` and `force_convergence` are part of the
    /// uniform host interface; individual variants are free to ignore
    /// them. `force_convergence` is raised on the final attempt the
    /// solver is willing to make for a timestep.
    fn simulate(
        &mut self,
        timestep: usize,
        values: &mut StepValues,
        seconds_per_timestep: u64,
        force_convergence: bool,
    ) -> ComponentResult<()>;

    /// Post-convergence hook for asserting invariants on own outputs.
    fn doublecheck(&self, _timestep: usize, _values: &StepValues) {}

    /// Lines this component contributes to the run report.
    fn write_to_report(&self) -> Vec<String> {
        Vec::new()
    }
}
