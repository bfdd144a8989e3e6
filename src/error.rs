use thiserror::Error;

/// Errors that can occur during the reference extraction phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error(
        "The entry point name '{start_node_name}' is already used by a node inside the subgraph"
    )]
    StartNameConflict { start_node_name: String },

    #[error("Node '{node_name}' is part of the subgraph but missing from the workflow name list")]
    NodeNotInWorkflow { node_name: String },

    #[error(
        "Parameter '{parameter}' of node '{node_name}' references unknown node '{referenced_name}'"
    )]
    UnknownNodeReference {
        node_name: String,
        parameter: String,
        referenced_name: String,
    },
}

/// Errors that can occur when converting a custom workflow format into a
/// `SubgraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum SubgraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while encoding, decoding or storing an
/// `ExtractionArtifact`.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
