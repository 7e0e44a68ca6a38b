//! Scenario files: a serializable description of a runnable setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::simulator::Simulator;
use hestia_components::{DummyBuilding, DummyBuildingConfig, ScheduleSource};
use hestia_core::{LoadType, SimulationParameters, Unit};
use hestia_graph::PortRegistry;

/// Heat-delivery profile for the scenario's source component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HeatProfileDef {
    /// The same wattage on every timestep.
    Constant { watts: f64 },
    /// Explicit per-timestep values; `default` applies past the end.
    Steps {
        values: Vec<f64>,
        #[serde(default)]
        default: f64,
    },
}

/// A runnable simulation setup: clock, building configuration, heat feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub parameters: SimulationParameters,
    #[serde(default)]
    pub building: DummyBuildingConfig,
    pub heat_profile: HeatProfileDef,
}

impl Scenario {
    pub const SOURCE_NAME: &'static str = "HeatSource";
    pub const BUILDING_NAME: &'static str = "Building";

    /// One simulated day at one-minute steps with a constant heat feed.
    pub fn one_day(name: impl Into<String>, year: i32, watts: f64) -> SimResult<Self> {
        Ok(Self {
            name: name.into(),
            parameters: SimulationParameters::one_day_only(year, 60)?,
            building: DummyBuildingConfig::default(),
            heat_profile: HeatProfileDef::Constant { watts },
        })
    }

    pub fn load_yaml(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_yaml(&self, path: &Path) -> SimResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Wire the scenario into a ready-to-run simulator.
    pub fn build(&self) -> SimResult<Simulator> {
        match &self.heat_profile {
            HeatProfileDef::Constant { watts } => {
                hestia_core::ensure_finite(*watts, "heat profile wattage")?;
            }
            HeatProfileDef::Steps { values, default } => {
                hestia_core::ensure_finite(*default, "heat profile default")?;
                for value in values {
                    hestia_core::ensure_finite(*value, "heat profile value")?;
                }
            }
        }

        let mut registry = PortRegistry::new();

        let source = match &self.heat_profile {
            HeatProfileDef::Constant { watts } => ScheduleSource::constant(
                Self::SOURCE_NAME,
                &mut registry,
                LoadType::Heating,
                Unit::Watt,
                *watts,
            ),
            HeatProfileDef::Steps { values, default } => ScheduleSource::new(
                Self::SOURCE_NAME,
                &mut registry,
                LoadType::Heating,
                Unit::Watt,
                values.clone(),
                *default,
            ),
        };
        let building = DummyBuilding::new(
            Self::BUILDING_NAME,
            &mut registry,
            &self.parameters,
            self.building.clone(),
        );

        registry.connect_by_name(
            Self::SOURCE_NAME,
            ScheduleSource::OUTPUT,
            Self::BUILDING_NAME,
            DummyBuilding::THERMAL_ENERGY_DELIVERED,
        )?;
        let wiring = registry.build()?;

        let mut simulator = Simulator::new(self.parameters.clone(), wiring);
        simulator.add_component(Box::new(source));
        simulator.add_component(Box::new(building));
        Ok(simulator)
    }
}
