use crate::extractor::extract_references_in_node_expressions;
use crate::subgraph::WorkflowNode;
use pyo3::prelude::*;

/// Extracts cross-node references from a workflow subgraph.
///
/// Scans every string parameter of the given nodes for references to nodes
/// outside the subgraph, converts each external reference into a uniquely
/// named input field on a synthetic entry node, and rewrites the expressions
/// in place. References between nodes inside the subgraph stay untouched.
///
/// Args:
///     nodes_json (str): A JSON array of the subgraph's node objects, each
///         with a `name` and a `parameters` mapping.
///     node_names (list[str]): All node names valid in the surrounding
///         workflow (a superset of the subgraph's names).
///     start_node_name (str): The name of the synthetic entry node. Defaults
///         to "Start".
///
/// Returns:
///     tuple: A pair `(nodes_json, variables)` where `nodes_json` is the
///         rewritten node array as a JSON string and `variables` is a list of
///         `(variable_name, original_expression)` pairs in first-seen order.
///
/// Raises:
///     ValueError: If the node JSON is malformed, a subgraph node is missing
///         from `node_names`, an expression references an unknown node, or a
///         subgraph node already carries the entry node's name.
#[pyfunction]
#[pyo3(signature = (nodes_json, node_names, start_node_name = "Start"))]
fn extract_references(
    nodes_json: &str,
    node_names: Vec<String>,
    start_node_name: &str,
) -> PyResult<(String, Vec<(String, String)>)> {
    let nodes: Vec<WorkflowNode> = serde_json::from_str(nodes_json)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    let result = extract_references_in_node_expressions(nodes, node_names, start_node_name)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    let rewritten = serde_json::to_string(&result.nodes)
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

    Ok((rewritten, result.variables.into_iter().collect()))
}

/// Workflow subgraph reference extraction.
///
/// This module provides Python bindings to the Kirinuki Rust library, which
/// rewrites cross-node expression references when a subset of workflow nodes
/// is extracted into a standalone sub-workflow.
#[pymodule]
fn kirinuki(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(extract_references, m)?)?;
    Ok(())
}
