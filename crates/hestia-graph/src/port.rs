//! Port declaration records.

use hestia_core::{InputId, LoadType, OutputId, Unit};

/// An output terminal, exclusively owned by its declaring component.
///
/// Each output backs exactly one slot of the per-timestep value vector.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPort {
    pub id: OutputId,
    pub component: String,
    pub name: String,
    pub load_type: LoadType,
    pub unit: Unit,
}

impl OutputPort {
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.component, self.name)
    }
}

/// An input terminal: a read-only reference to a value produced elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct InputPort {
    pub id: InputId,
    pub component: String,
    pub name: String,
    pub load_type: LoadType,
    pub unit: Unit,
    /// Mandatory inputs must be wired before `PortRegistry::build` succeeds.
    pub mandatory: bool,
    pub(crate) source: Option<OutputId>,
}

impl InputPort {
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.component, self.name)
    }

    /// The wired source output, if any.
    pub fn source(&self) -> Option<OutputId> {
        self.source
    }
}
