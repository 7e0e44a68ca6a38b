//! Smoke tests exercising components through the trait object surface.

use hestia_components::{Component, DummyBuilding, DummyBuildingConfig, ScheduleSource};
use hestia_core::{LoadType, SimulationParameters, Unit};
use hestia_graph::PortRegistry;

#[test]
fn source_feeds_building_through_the_wiring() {
    let params = SimulationParameters::one_day_only(2021, 60).unwrap();
    let mut registry = PortRegistry::new();

    let source = ScheduleSource::constant(
        "HeatSource",
        &mut registry,
        LoadType::Heating,
        Unit::Watt,
        5000.0,
    );
    let building = DummyBuilding::new(
        "Building",
        &mut registry,
        &params,
        DummyBuildingConfig::default(),
    );
    registry
        .connect_by_name(
            "HeatSource",
            ScheduleSource::OUTPUT,
            "Building",
            DummyBuilding::THERMAL_ENERGY_DELIVERED,
        )
        .unwrap();
    let wiring = registry.build().unwrap();

    let temperature_port = building.temperature_port();
    let stored_port = building.stored_energy_port();
    let capacity = building.capacity;

    // Drive the pair the way the host does: dynamic dispatch, producer first.
    let mut components: Vec<Box<dyn Component>> = vec![Box::new(source), Box::new(building)];
    let mut values = wiring.new_step_values();

    for component in &mut components {
        component.save_state();
    }
    for component in &mut components {
        component.simulate(721, &mut values, 60, false).unwrap();
    }

    let expected_stored = (25.0 + 273.15) * capacity + 5000.0;
    assert_eq!(values.get_output(stored_port), expected_stored);
    assert!((values.get_output(temperature_port) - (expected_stored / capacity - 273.15)).abs() < 1e-12);
}

#[test]
fn building_report_is_empty_and_source_report_is_not() {
    let params = SimulationParameters::one_day_only(2021, 60).unwrap();
    let mut registry = PortRegistry::new();
    let source = ScheduleSource::constant(
        "HeatSource",
        &mut registry,
        LoadType::Heating,
        Unit::Watt,
        0.0,
    );
    let building = DummyBuilding::new(
        "Building",
        &mut registry,
        &params,
        DummyBuildingConfig::default(),
    );

    assert!(building.write_to_report().is_empty());
    assert_eq!(source.write_to_report().len(), 1);
}

#[test]
fn doublecheck_default_is_callable_and_inert() {
    let params = SimulationParameters::one_day_only(2021, 60).unwrap();
    let mut registry = PortRegistry::new();
    let probe = registry.register_output("Probe", "Heat", LoadType::Heating, Unit::Watt);
    let building = DummyBuilding::new(
        "Building",
        &mut registry,
        &params,
        DummyBuildingConfig::default(),
    );
    registry.connect(probe, building.heat_input_port()).unwrap();
    let wiring = registry.build().unwrap();
    let values = wiring.new_step_values();

    building.doublecheck(0, &values);
}
