//! hestia-components: component library for the hestia engine.
//!
//! Provides the component lifecycle contract (`Component`) plus the
//! concrete units shipped with the engine:
//! - `DummyBuilding`: a deliberately simplified building/energy asset
//!   with scheduled electricity exchange and a one-node thermal store
//! - `ScheduleSource`: a stateless per-timestep profile producer
//!
//! All components declare their ports against a `PortRegistry` at
//! construction time and are then driven uniformly by the host through
//! the `Component` trait.
//!
//! # Example
//!
//! ```
//! use hestia_components::{Component, DummyBuilding, DummyBuildingConfig, ScheduleSource};
//! use hestia_core::{LoadType, SimulationParameters, Unit};
//! use hestia_graph::PortRegistry;
//!
//! let params = SimulationParameters::one_day_only(2021, 60).unwrap();
//! let mut registry = PortRegistry::new();
//!
//! let mut source = ScheduleSource::constant(
//!     "HeatSource", &mut registry, LoadType::Heating, Unit::Watt, 5000.0,
//! );
//! let mut building = DummyBuilding::new(
//!     "Building", &mut registry, &params, DummyBuildingConfig::default(),
//! );
//! registry
//!     .connect_by_name(
//!         "HeatSource", ScheduleSource::OUTPUT,
//!         "Building", DummyBuilding::THERMAL_ENERGY_DELIVERED,
//!     )
//!     .unwrap();
//!
//! let wiring = registry.build().unwrap();
//! let mut values = wiring.new_step_values();
//! source.simulate(0, &mut values, 60, false).unwrap();
//! building.simulate(0, &mut values, 60, false).unwrap();
//! assert_eq!(values.get_output(building.temperature_port()), 25.0);
//! ```

pub mod building;
pub mod component;
pub mod error;
pub mod schedule;

// Re-exports
pub use building::{DummyBuilding, DummyBuildingConfig};
pub use component::Component;
pub use error::{ComponentError, ComponentResult};
pub use schedule::ScheduleSource;
