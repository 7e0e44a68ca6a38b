//! Frozen, validated port declarations.

use hestia_core::{InputId, OutputId};

use crate::port::{InputPort, OutputPort};
use crate::values::StepValues;

/// The immutable wiring of one simulation setup.
///
/// Produced by [`crate::PortRegistry::build`]; every mandatory input is
/// guaranteed to have a wired source.
#[derive(Debug, Clone)]
pub struct Wiring {
    inputs: Vec<InputPort>,
    outputs: Vec<OutputPort>,
}

impl Wiring {
    pub(crate) fn new(inputs: Vec<InputPort>, outputs: Vec<OutputPort>) -> Self {
        Self { inputs, outputs }
    }

    /// All declared input ports, in registration order.
    pub fn inputs(&self) -> &[InputPort] {
        &self.inputs
    }

    /// All declared output ports, in registration order. Their order
    /// defines the column order of recorded results.
    pub fn outputs(&self) -> &[OutputPort] {
        &self.outputs
    }

    pub fn input(&self, id: InputId) -> Option<&InputPort> {
        self.inputs.get(id.index())
    }

    pub fn output(&self, id: OutputId) -> Option<&OutputPort> {
        self.outputs.get(id.index())
    }

    /// Construct a zeroed value vector with input→slot resolution baked in.
    pub fn new_step_values(&self) -> StepValues {
        let input_slots = self
            .inputs
            .iter()
            .map(|port| port.source.map(OutputId::index))
            .collect();
        StepValues::new(self.outputs.len(), input_slots)
    }
}
