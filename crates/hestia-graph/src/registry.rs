//! Incremental port registry.

use hestia_core::{InputId, LoadType, OutputId, Unit};

use crate::error::{GraphError, GraphResult};
use crate::port::{InputPort, OutputPort};
use crate::validate;
use crate::wiring::Wiring;

/// Build-time registry the host hands to components while they declare ports.
///
/// Components call `register_input`/`register_output` during construction
/// and retain the returned handles for O(1) access at simulation time.
/// The host then wires outputs into inputs with `connect`/`connect_by_name`
/// and calls `build()` to validate and freeze everything into a [`Wiring`].
#[derive(Debug, Default)]
pub struct PortRegistry {
    inputs: Vec<InputPort>,
    outputs: Vec<OutputPort>,
}

impl PortRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input port and return its handle.
    pub fn register_input(
        &mut self,
        component: impl Into<String>,
        name: impl Into<String>,
        load_type: LoadType,
        unit: Unit,
        mandatory: bool,
    ) -> InputId {
        let id = InputId::from_index(self.inputs.len());
        self.inputs.push(InputPort {
            id,
            component: component.into(),
            name: name.into(),
            load_type,
            unit,
            mandatory,
            source: None,
        });
        id
    }

    /// Declare an output port and return its handle.
    pub fn register_output(
        &mut self,
        component: impl Into<String>,
        name: impl Into<String>,
        load_type: LoadType,
        unit: Unit,
    ) -> OutputId {
        let id = OutputId::from_index(self.outputs.len());
        self.outputs.push(OutputPort {
            id,
            component: component.into(),
            name: name.into(),
            load_type,
            unit,
        });
        id
    }

    /// Wire `source` into `target`.
    ///
    /// Fails on unknown handles, mismatched load type or unit, or a target
    /// that already has a source.
    pub fn connect(&mut self, source: OutputId, target: InputId) -> GraphResult<()> {
        let output = self
            .outputs
            .get(source.index())
            .cloned()
            .ok_or(GraphError::UnknownOutputId { id: source })?;
        let input = self
            .inputs
            .get_mut(target.index())
            .ok_or(GraphError::UnknownInputId { id: target })?;

        if input.load_type != output.load_type || input.unit != output.unit {
            return Err(GraphError::TypeMismatch {
                output: output.full_name(),
                output_load_type: output.load_type,
                output_unit: output.unit,
                input: input.full_name(),
                input_load_type: input.load_type,
                input_unit: input.unit,
            });
        }
        if input.source.is_some() {
            return Err(GraphError::AlreadyConnected {
                input: input.full_name(),
            });
        }

        input.source = Some(source);
        Ok(())
    }

    /// Name-based convenience wrapper around [`PortRegistry::connect`].
    pub fn connect_by_name(
        &mut self,
        src_component: &str,
        src_port: &str,
        dst_component: &str,
        dst_port: &str,
    ) -> GraphResult<()> {
        let source = self.find_output(src_component, src_port)?;
        let target = self.find_input(dst_component, dst_port)?;
        self.connect(source, target)
    }

    fn find_output(&self, component: &str, name: &str) -> GraphResult<OutputId> {
        self.outputs
            .iter()
            .find(|p| p.component == component && p.name == name)
            .map(|p| p.id)
            .ok_or_else(|| GraphError::UnknownOutputName {
                component: component.to_string(),
                name: name.to_string(),
            })
    }

    fn find_input(&self, component: &str, name: &str) -> GraphResult<InputId> {
        self.inputs
            .iter()
            .find(|p| p.component == component && p.name == name)
            .map(|p| p.id)
            .ok_or_else(|| GraphError::UnknownInputName {
                component: component.to_string(),
                name: name.to_string(),
            })
    }

    /// Validate the declarations and freeze them into an immutable [`Wiring`].
    pub fn build(self) -> GraphResult<Wiring> {
        validate::check_declarations(&self.inputs, &self.outputs)?;
        Ok(Wiring::new(self.inputs, self.outputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_index_into_separate_tables() {
        let mut registry = PortRegistry::new();
        let o = registry.register_output("A", "Out", LoadType::Heating, Unit::Watt);
        let i = registry.register_input("B", "In", LoadType::Heating, Unit::Watt, false);
        assert_eq!(o.index(), 0);
        assert_eq!(i.index(), 0);
    }

    #[test]
    fn connect_checks_load_type_and_unit() {
        let mut registry = PortRegistry::new();
        let o = registry.register_output("A", "Out", LoadType::Electricity, Unit::Watt);
        let i = registry.register_input("B", "In", LoadType::Heating, Unit::Watt, false);
        let err = registry.connect(o, i).unwrap_err();
        assert!(matches!(err, GraphError::TypeMismatch { .. }));
    }

    #[test]
    fn connect_rejects_second_source() {
        let mut registry = PortRegistry::new();
        let o1 = registry.register_output("A", "Out", LoadType::Heating, Unit::Watt);
        let o2 = registry.register_output("C", "Out", LoadType::Heating, Unit::Watt);
        let i = registry.register_input("B", "In", LoadType::Heating, Unit::Watt, false);
        registry.connect(o1, i).unwrap();
        let err = registry.connect(o2, i).unwrap_err();
        assert!(matches!(err, GraphError::AlreadyConnected { .. }));
    }

    #[test]
    fn connect_by_name_resolves_ports() {
        let mut registry = PortRegistry::new();
        registry.register_output("Boiler", "HeatOutput", LoadType::Heating, Unit::Watt);
        registry.register_input("House", "HeatInput", LoadType::Heating, Unit::Watt, true);
        registry
            .connect_by_name("Boiler", "HeatOutput", "House", "HeatInput")
            .unwrap();
        let wiring = registry.build().unwrap();
        assert!(wiring.inputs()[0].source().is_some());
    }

    #[test]
    fn connect_by_name_reports_missing_port() {
        let mut registry = PortRegistry::new();
        registry.register_output("Boiler", "HeatOutput", LoadType::Heating, Unit::Watt);
        let err = registry
            .connect_by_name("Boiler", "HeatOutput", "House", "HeatInput")
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownInputName { .. }));
    }
}
