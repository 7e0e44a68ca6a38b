//! Wiring validation.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};
use crate::port::{InputPort, OutputPort};

/// Validate frozen declarations: unique names per side, wired sources in
/// range, every mandatory input wired.
pub(crate) fn check_declarations(
    inputs: &[InputPort],
    outputs: &[OutputPort],
) -> GraphResult<()> {
    let mut seen = HashSet::new();
    for port in outputs {
        if !seen.insert((port.component.as_str(), port.name.as_str())) {
            return Err(GraphError::DuplicatePort {
                component: port.component.clone(),
                name: port.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for port in inputs {
        if !seen.insert((port.component.as_str(), port.name.as_str())) {
            return Err(GraphError::DuplicatePort {
                component: port.component.clone(),
                name: port.name.clone(),
            });
        }
        if let Some(source) = port.source
            && source.index() >= outputs.len()
        {
            return Err(GraphError::UnknownOutputId { id: source });
        }
        if port.mandatory && port.source.is_none() {
            return Err(GraphError::UnconnectedMandatoryInput {
                component: port.component.clone(),
                name: port.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PortRegistry;
    use hestia_core::{LoadType, Unit};

    #[test]
    fn duplicate_output_declaration_fails() {
        let mut registry = PortRegistry::new();
        registry.register_output("A", "Out", LoadType::Heating, Unit::Watt);
        registry.register_output("A", "Out", LoadType::Heating, Unit::Watt);
        let err = registry.build().unwrap_err();
        assert!(matches!(err, GraphError::DuplicatePort { .. }));
    }

    #[test]
    fn duplicate_input_declaration_fails() {
        let mut registry = PortRegistry::new();
        registry.register_input("A", "In", LoadType::Heating, Unit::Watt, false);
        registry.register_input("A", "In", LoadType::Heating, Unit::Watt, false);
        let err = registry.build().unwrap_err();
        assert!(matches!(err, GraphError::DuplicatePort { .. }));
    }

    #[test]
    fn unwired_mandatory_input_fails() {
        let mut registry = PortRegistry::new();
        registry.register_input("House", "HeatInput", LoadType::Heating, Unit::Watt, true);
        let err = registry.build().unwrap_err();
        assert!(matches!(
            err,
            GraphError::UnconnectedMandatoryInput { .. }
        ));
    }

    #[test]
    fn unwired_optional_input_passes() {
        let mut registry = PortRegistry::new();
        registry.register_input("House", "HeatInput", LoadType::Heating, Unit::Watt, false);
        assert!(registry.build().is_ok());
    }
}
