use super::definition::SubgraphDefinition;
use crate::error::SubgraphConversionError;

/// A trait for custom workflow models that can be converted into a
/// `SubgraphDefinition`.
///
/// This is the primary extension point for making Kirinuki format-agnostic.
/// Implement it on your own workflow structs to provide the translation layer
/// between your storage format and the extractor's canonical model.
///
/// # Example
///
/// ```rust
/// use kirinuki::prelude::*;
/// use kirinuki::error::SubgraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyWorkflow {
///     nodes: Vec<WorkflowNode>,
///     selected: Vec<String>,
/// }
///
/// // 2. Implement `IntoSubgraph` for your top-level struct.
/// impl IntoSubgraph for MyWorkflow {
///     fn into_subgraph(self) -> std::result::Result<SubgraphDefinition, SubgraphConversionError> {
///         let node_names = self.nodes.iter().map(|n| n.name.clone()).collect();
///         let mut nodes = Vec::new();
///         for wanted in &self.selected {
///             let node = self
///                 .nodes
///                 .iter()
///                 .find(|n| &n.name == wanted)
///                 .cloned()
///                 .ok_or_else(|| {
///                     SubgraphConversionError::ValidationError(format!(
///                         "Selected node '{wanted}' does not exist"
///                     ))
///                 })?;
///             nodes.push(node);
///         }
///         Ok(SubgraphDefinition { nodes, node_names })
///     }
/// }
/// ```
pub trait IntoSubgraph {
    /// Consumes the object and converts it into the extractor's canonical
    /// subgraph model.
    fn into_subgraph(self) -> Result<SubgraphDefinition, SubgraphConversionError>;
}
