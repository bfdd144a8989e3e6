//! # Kirinuki - Workflow Subgraph Reference Extraction Engine
//!
//! **Kirinuki** extracts a selected subset of workflow nodes (a "subgraph")
//! into a form that can run standalone behind a single synthetic entry node.
//! Expressions inside the extracted nodes may reference data produced by
//! nodes that are *not* part of the subgraph; Kirinuki detects every such
//! external reference inside arbitrary expression text, converts it into a
//! uniquely named input field on the entry node, and rewrites it in place.
//! References between nodes that stay inside the subgraph are left untouched,
//! byte for byte.
//!
//! The engine never *evaluates* expressions. It pattern-matches and rewrites
//! their source text, and returns a variable map that an external
//! collaborator can use to materialize the entry node's static data.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a subgraph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse your workflow format (e.g. from JSON) into your own Rust structs.
//! 2.  **Convert to Kirinuki's Model**: Implement the `IntoSubgraph` trait for your structs to provide a translation layer into Kirinuki's `SubgraphDefinition`.
//! 3.  **Extract**: Use `Extractor::builder` to create an extractor with the `SubgraphDefinition` and an entry node name. Extraction validates the graph, scans every string parameter, and rewrites external references.
//! 4.  **Consume the Result**: Use `variables` to build the entry node's static output data and `nodes` as the body of the new sub-workflow.
//!
//! ## Quick Start
//!
//! ```rust
//! use kirinuki::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     // A node that references data from "Fetch Orders", a node that will
//!     // NOT be part of the extracted subgraph.
//!     let mut node = WorkflowNode::new("Send Email");
//!     node.parameters.insert(
//!         "subject".to_string(),
//!         json!("={{ $(\"Fetch Orders\").item.json.orderId }}"),
//!     );
//!
//!     let subgraph = SubgraphDefinition {
//!         nodes: vec![node],
//!         node_names: vec!["Fetch Orders".to_string(), "Send Email".to_string()],
//!     };
//!
//!     let result = Extractor::builder(subgraph)
//!         .start_node_name("Start")
//!         .build()
//!         .extract()?;
//!
//!     // The external reference became an input field on the entry node...
//!     assert_eq!(
//!         result.variables.get("orderId").map(String::as_str),
//!         Some("$(\"Fetch Orders\").item.json.orderId"),
//!     );
//!     // ...and the expression now reads from the entry node instead.
//!     assert_eq!(
//!         result.nodes[0].parameters["subject"],
//!         json!("={{ $('Start').item.json.orderId }}"),
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod extractor;
pub mod pattern;
pub mod prelude;
pub mod resolver;
pub mod scanner;
pub mod subgraph;

#[cfg(feature = "python-bindings")]
mod python;
