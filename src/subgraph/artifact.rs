use super::definition::WorkflowNode;
use crate::error::ArtifactError;
use crate::extractor::ExtractionResult;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A self-contained binary snapshot of one extraction run, ready to hand to
/// the collaborator that materializes the new sub-workflow and the entry
/// node's static data.
///
/// The rewritten nodes are embedded in their JSON wire form: their parameters
/// are arbitrary JSON values, which a non-self-describing codec cannot
/// round-trip natively.
#[derive(Serialize, Deserialize, Debug)]
pub struct ExtractionArtifact {
    pub start_node_name: String,
    nodes_json: String,
    pub variables: IndexMap<String, String>,
}

impl ExtractionArtifact {
    pub fn new(result: &ExtractionResult, start_node_name: &str) -> Result<Self, ArtifactError> {
        let nodes_json = serde_json::to_string(&result.nodes)
            .map_err(|e| ArtifactError::Generic(format!("Node serialization failed: {}", e)))?;
        Ok(Self {
            start_node_name: start_node_name.to_string(),
            nodes_json,
            variables: result.variables.clone(),
        })
    }

    /// The rewritten subgraph nodes stored in this artifact.
    pub fn nodes(&self) -> Result<Vec<WorkflowNode>, ArtifactError> {
        serde_json::from_str(&self.nodes_json)
            .map_err(|e| ArtifactError::Generic(format!("Node deserialization failed: {}", e)))
    }

    /// Saves the artifact to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads an artifact from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes an artifact from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(artifact, _)| artifact) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
