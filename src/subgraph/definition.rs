use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The canonical input for one extraction run: the subgraph being cut out and
/// the ordered universe of node names valid in the surrounding workflow.
/// This is the target structure for any custom workflow model conversion.
#[derive(Debug, Clone, Default)]
pub struct SubgraphDefinition {
    pub nodes: Vec<WorkflowNode>,
    pub node_names: Vec<String>,
}

/// A single workflow node: a name unique within its workflow plus a parameter
/// map. Only string-typed parameter values are scanned for references; fields
/// the extractor does not interpret (ids, positions, type metadata) round-trip
/// through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub name: String,
    #[serde(default)]
    pub parameters: IndexMap<String, serde_json::Value>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl WorkflowNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: IndexMap::new(),
            extra: IndexMap::new(),
        }
    }
}
