//! The shared per-timestep value vector.

use hestia_core::{InputId, OutputId, Real, Tolerances, all_nearly_equal};

/// Scalar values exchanged between components within one timestep.
///
/// One `f64` slot per declared output, in registration order. Inputs read
/// through the slot of their wired source output. The vector is owned by
/// the host engine and passed by reference into every component's
/// simulate call; by convention a component writes only its own declared
/// outputs and reads only its own declared inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct StepValues {
    values: Vec<Real>,
    input_slots: Vec<Option<usize>>,
}

impl StepValues {
    pub(crate) fn new(output_count: usize, input_slots: Vec<Option<usize>>) -> Self {
        Self {
            values: vec![0.0; output_count],
            input_slots,
        }
    }

    /// Read a declared input through its wired source.
    ///
    /// Unwired optional inputs read as 0.0 (the host's default policy);
    /// wiring validation has already rejected unwired mandatory inputs.
    pub fn get_input(&self, id: InputId) -> Real {
        self.input_slots
            .get(id.index())
            .copied()
            .flatten()
            .map_or(0.0, |slot| self.values[slot])
    }

    /// Write a declared output's slot. Unknown handles are ignored.
    pub fn set_output(&mut self, id: OutputId, value: Real) {
        if let Some(slot) = self.values.get_mut(id.index()) {
            *slot = value;
        }
    }

    /// Read an output's slot directly (recording, assertions).
    pub fn get_output(&self, id: OutputId) -> Real {
        self.values.get(id.index()).copied().unwrap_or(0.0)
    }

    /// Zero every slot; called by the host at the start of each timestep.
    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    /// All output slots in registration order.
    pub fn as_slice(&self) -> &[Real] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element-wise tolerance comparison, the solver's fixed-point test.
    pub fn nearly_equals(&self, other: &Self, tol: Tolerances) -> bool {
        all_nearly_equal(&self.values, &other.values, tol)
    }
}
