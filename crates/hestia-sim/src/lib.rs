//! hestia-sim: host engine for time-stepped component simulation.
//!
//! Provides:
//! - `Simulator`: fixed-order per-timestep loop with an iterative
//!   fixed-point solver, bracketing retries with component
//!   save/restore checkpoints
//! - `SimRecord`: in-memory recording of every output column per timestep
//! - `Scenario`: YAML-loadable description of a runnable setup

pub mod error;
pub mod record;
pub mod scenario;
pub mod simulator;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use record::{OutputColumn, SimRecord};
pub use scenario::{HeatProfileDef, Scenario};
pub use simulator::{Simulator, SolverOptions};
