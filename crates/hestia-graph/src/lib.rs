//! hestia-graph: port declaration and wiring layer.
//!
//! Provides:
//! - Port records (`InputPort`, `OutputPort`)
//! - Incremental `PortRegistry` with connection type-checking
//! - Wiring validation (mandatory inputs must have a wired source)
//! - The shared per-timestep value vector (`StepValues`)
//!
//! # Example
//!
//! ```
//! use hestia_core::{LoadType, Unit};
//! use hestia_graph::PortRegistry;
//!
//! let mut registry = PortRegistry::new();
//! let heat_out = registry.register_output("Boiler", "HeatOutput", LoadType::Heating, Unit::Watt);
//! let heat_in = registry.register_input("House", "HeatInput", LoadType::Heating, Unit::Watt, true);
//! registry.connect(heat_out, heat_in).unwrap();
//!
//! let wiring = registry.build().unwrap();
//! let mut values = wiring.new_step_values();
//! values.set_output(heat_out, 1200.0);
//! assert_eq!(values.get_input(heat_in), 1200.0);
//! ```

pub mod error;
pub mod port;
pub mod registry;
pub(crate) mod validate;
pub mod values;
pub mod wiring;

// Re-exports for ergonomics
pub use error::{GraphError, GraphResult};
pub use port::{InputPort, OutputPort};
pub use registry::PortRegistry;
pub use values::StepValues;
pub use wiring::Wiring;
