//! Common test utilities for building workflow nodes and subgraphs.
use kirinuki::prelude::*;
use serde_json::json;

/// Creates a node whose parameters `p0..pN` wrap the given expressions in the
/// workflow's template marker, the way editor-built nodes store them.
#[allow(dead_code)]
pub fn make_node(name: &str, expressions: &[&str]) -> WorkflowNode {
    let mut node = WorkflowNode::new(name);
    for (index, expression) in expressions.iter().enumerate() {
        node.parameters.insert(
            format!("p{index}"),
            json!(format!("={{{{ {expression} }}}}")),
        );
    }
    node
}

/// Collects node names into the owned form the extractor expects.
#[allow(dead_code)]
pub fn names(node_names: &[&str]) -> Vec<String> {
    node_names.iter().map(|name| name.to_string()).collect()
}

/// Reads a string parameter back out of a rewritten node.
#[allow(dead_code)]
pub fn parameter<'a>(node: &'a WorkflowNode, key: &str) -> &'a str {
    node.parameters
        .get(key)
        .and_then(|value| value.as_str())
        .unwrap_or_default()
}

/// Flattens the variables map into comparable pairs, preserving order.
#[allow(dead_code)]
pub fn variable_pairs(result: &ExtractionResult) -> Vec<(&str, &str)> {
    result
        .variables
        .iter()
        .map(|(name, expression)| (name.as_str(), expression.as_str()))
        .collect()
}
