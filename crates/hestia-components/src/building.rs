//! A deliberately simplified building/energy asset.
//!
//! This is a stand-in used to exercise engine scenarios end to end, not a
//! validated physical model: electricity follows a fixed daily schedule
//! and the thermal store tracks a bookkeeping quantity proportional to an
//! offset temperature. Its arithmetic is part of the observable contract
//! and is kept exactly as is.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::ComponentResult;
use hestia_core::{InputId, LoadType, OutputId, SimulationParameters, Unit};
use hestia_graph::{PortRegistry, StepValues};

// Timestep thresholds below are indices at one-minute steps.
/// 06:00..09:00, electricity at the baseline magnitude.
const MORNING_WINDOW: Range<usize> = 360..540;
/// 15:00..18:00, electricity at the negated baseline magnitude.
const AFTERNOON_WINDOW: Range<usize> = 900..1080;
/// Through 12:00 the thermal store holds its initial temperature.
const WARM_UP_END: usize = 720;

/// Celsius offset keeping the stored-energy quantity positive. Pure
/// bookkeeping, not an SI unit conversion.
const DEG_C_TO_K: f64 = 273.15;

/// Baseline electricity magnitude in W; negative is the
/// generation/export sign convention.
const BASE_ELECTRICITY_W: f64 = -1_000.0;
const DEFAULT_CAPACITY: f64 = 45.0 * 121.2;
const DEFAULT_INITIAL_TEMPERATURE_C: f64 = 25.0;

/// Optional construction overrides; `None` falls back to the documented
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DummyBuildingConfig {
    /// Scale factor on the baseline electricity magnitude.
    pub electricity: Option<f64>,
    /// Accepted for interface uniformity; this stand-in derives no
    /// separate heat profile from it.
    pub heat: Option<f64>,
    /// Thermal capacity constant.
    pub capacity: Option<f64>,
    /// Initial residence temperature in °C.
    pub initial_temperature: Option<f64>,
}

/// Simplified building asset: scheduled electricity exchange plus a
/// one-node thermal store fed by a wired heat input.
///
/// Stored energy is tracked as `(temperature + 273.15) * capacity` and,
/// once the warm-up phase ends, grows additively by whatever energy
/// arrives on the `ThermalEnergyDelivered` input each timestep.
#[derive(Debug)]
pub struct DummyBuilding {
    name: String,

    /// Resolved electricity magnitude, W (negative = generation/export).
    pub electricity_baseline_w: f64,
    /// Thermal capacity constant weighting the stored-energy bookkeeping.
    pub capacity: f64,
    /// Temperature the residence starts at and holds through warm-up, °C.
    pub initial_temperature_c: f64,
    /// Retained from the simulation clock; unused by this asset's update.
    pub time_correction_factor: f64,

    temperature_c: f64,
    previous_temperature_c: f64,

    thermal_energy_delivered: InputId,
    temperature_mean: OutputId,
    electricity_output: OutputId,
    stored_energy: OutputId,
}

impl DummyBuilding {
    pub const THERMAL_ENERGY_DELIVERED: &'static str = "ThermalEnergyDelivered";
    pub const TEMPERATURE_MEAN: &'static str = "Residence Temperature";
    pub const ELECTRICITY_OUTPUT: &'static str = "ElectricityOutput";
    pub const STORED_ENERGY: &'static str = "StoredEnergy";

    /// Create the asset and declare its ports.
    ///
    /// Never fails for finite configuration values; the heat input is
    /// mandatory and must be wired before the registry freezes.
    pub fn new(
        name: impl Into<String>,
        registry: &mut PortRegistry,
        parameters: &SimulationParameters,
        config: DummyBuildingConfig,
    ) -> Self {
        let name = name.into();

        let electricity_baseline_w = match config.electricity {
            None => BASE_ELECTRICITY_W,
            Some(scale) => BASE_ELECTRICITY_W * scale,
        };
        let capacity = config.capacity.unwrap_or(DEFAULT_CAPACITY);
        let initial_temperature_c = config
            .initial_temperature
            .unwrap_or(DEFAULT_INITIAL_TEMPERATURE_C);

        let thermal_energy_delivered = registry.register_input(
            &name,
            Self::THERMAL_ENERGY_DELIVERED,
            LoadType::Heating,
            Unit::Watt,
            true,
        );
        let temperature_mean = registry.register_output(
            &name,
            Self::TEMPERATURE_MEAN,
            LoadType::Temperature,
            Unit::Celsius,
        );
        let electricity_output = registry.register_output(
            &name,
            Self::ELECTRICITY_OUTPUT,
            LoadType::Electricity,
            Unit::Watt,
        );
        let stored_energy =
            registry.register_output(&name, Self::STORED_ENERGY, LoadType::Heating, Unit::Watt);

        Self {
            name,
            electricity_baseline_w,
            capacity,
            initial_temperature_c,
            time_correction_factor: 1.0 / parameters.seconds_per_timestep as f64,
            temperature_c: initial_temperature_c,
            previous_temperature_c: initial_temperature_c,
            thermal_energy_delivered,
            temperature_mean,
            electricity_output,
            stored_energy,
        }
    }

    /// Current residence temperature, °C.
    pub fn temperature(&self) -> f64 {
        self.temperature_c
    }

    /// Handle of the mandatory heat input.
    pub fn heat_input_port(&self) -> InputId {
        self.thermal_energy_delivered
    }

    pub fn temperature_port(&self) -> OutputId {
        self.temperature_mean
    }

    pub fn electricity_port(&self) -> OutputId {
        self.electricity_output
    }

    pub fn stored_energy_port(&self) -> OutputId {
        self.stored_energy
    }
}

impl Component for DummyBuilding {
    fn name(&self) -> &str {
        &self.name
    }

    fn save_state(&mut self) {
        self.previous_temperature_c = self.temperature_c;
    }

    fn restore_state(&mut self) {
        self.temperature_c = self.previous_temperature_c;
    }

    fn simulate(
        &mut self,
        timestep: usize,
        values: &mut StepValues,
        _seconds_per_timestep: u64,
        _force_convergence: bool,
    ) -> ComponentResult<()> {
        let mut electricity_output = 0.0;
        if MORNING_WINDOW.contains(&timestep) {
            electricity_output = self.electricity_baseline_w;
        } else if AFTERNOON_WINDOW.contains(&timestep) {
            electricity_output = -self.electricity_baseline_w;
        }
        values.set_output(self.electricity_output, electricity_output);

        let (temperature, current_stored_energy) = if timestep <= WARM_UP_END {
            // Warm-up holds the residence at its initial temperature; the
            // heat input is not consulted.
            (
                self.initial_temperature_c,
                (self.initial_temperature_c + DEG_C_TO_K) * self.capacity,
            )
        } else {
            let delivered = values.get_input(self.thermal_energy_delivered);
            let previous_stored = (self.previous_temperature_c + DEG_C_TO_K) * self.capacity;
            let current_stored = previous_stored + delivered;
            self.temperature_c = current_stored / self.capacity - DEG_C_TO_K;
            (self.temperature_c, current_stored)
        };

        values.set_output(self.stored_energy, current_stored_energy);
        values.set_output(self.temperature_mean, temperature);
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn electricity_at(timestep: usize, baseline: f64) -> f64 {
        let params = SimulationParameters::one_day_only(2021, 60).unwrap();
        let mut registry = PortRegistry::new();
        let probe = registry.register_output("Probe", "Heat", LoadType::Heating, Unit::Watt);
        let mut building = DummyBuilding::new(
            "Building",
            &mut registry,
            &params,
            DummyBuildingConfig {
                electricity: Some(baseline / -1000.0),
                ..Default::default()
            },
        );
        registry.connect(probe, building.heat_input_port()).unwrap();
        let wiring = registry.build().unwrap();
        let mut values = wiring.new_step_values();
        building.simulate(timestep, &mut values, 60, false).unwrap();
        values.get_output(building.electricity_port())
    }

    proptest! {
        #[test]
        fn electricity_is_zero_outside_both_windows(timestep in 0_usize..100_000) {
            prop_assume!(!(360..540).contains(&timestep) && !(900..1080).contains(&timestep));
            prop_assert_eq!(electricity_at(timestep, -1000.0), 0.0);
        }

        #[test]
        fn windows_emit_opposite_signs(offset in 0_usize..180) {
            let morning = electricity_at(360 + offset, -1000.0);
            let afternoon = electricity_at(900 + offset, -1000.0);
            prop_assert_eq!(morning, -1000.0);
            prop_assert_eq!(afternoon, 1000.0);
        }

        #[test]
        fn warm_up_is_input_independent(timestep in 0_usize..=720, delivered in 0.0_f64..1e9) {
            let params = SimulationParameters::one_day_only(2021, 60).unwrap();
            let mut registry = PortRegistry::new();
            let probe = registry.register_output("Probe", "Heat", LoadType::Heating, Unit::Watt);
            let mut building = DummyBuilding::new(
                "Building", &mut registry, &params, DummyBuildingConfig::default(),
            );
            registry.connect(probe, building.heat_input_port()).unwrap();
            let wiring = registry.build().unwrap();
            let mut values = wiring.new_step_values();

            values.set_output(probe, delivered);
            building.simulate(timestep, &mut values, 60, false).unwrap();

            prop_assert_eq!(values.get_output(building.temperature_port()), 25.0);
            prop_assert_eq!(
                values.get_output(building.stored_energy_port()),
                (25.0 + 273.15) * (45.0 * 121.2)
            );
        }
    }
}
