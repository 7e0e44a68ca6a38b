//! Wiring-specific error types.

use hestia_core::{InputId, LoadType, OutputId, Unit};
use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

/// Port registration and wiring errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Output handle {id} was never registered")]
    UnknownOutputId { id: OutputId },

    #[error("Input handle {id} was never registered")]
    UnknownInputId { id: InputId },

    #[error("No output port named {component}.{name}")]
    UnknownOutputName { component: String, name: String },

    #[error("No input port named {component}.{name}")]
    UnknownInputName { component: String, name: String },

    #[error(
        "Cannot wire {output} ({output_load_type} in {output_unit}) \
         into {input} ({input_load_type} in {input_unit})"
    )]
    TypeMismatch {
        output: String,
        output_load_type: LoadType,
        output_unit: Unit,
        input: String,
        input_load_type: LoadType,
        input_unit: Unit,
    },

    #[error("Input {input} already has a wired source")]
    AlreadyConnected { input: String },

    #[error("Port {component}.{name} is declared more than once")]
    DuplicatePort { component: String, name: String },

    #[error("Mandatory input {component}.{name} has no wired source")]
    UnconnectedMandatoryInput { component: String, name: String },
}
