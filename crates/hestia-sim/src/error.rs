//! Error types for simulation runs.

use thiserror::Error;

/// Errors encountered while building or running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Core(#[from] hestia_core::CoreError),

    #[error(transparent)]
    Graph(#[from] hestia_graph::GraphError),

    #[error(transparent)]
    Component(#[from] hestia_components::ComponentError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type SimResult<T> = Result<T, SimError>;
