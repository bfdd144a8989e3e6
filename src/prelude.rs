//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! kirinuki crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kirinuki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a subgraph and run the extraction
//! let workflow_json = std::fs::read_to_string("path/to/workflow.json")?;
//! let nodes: Vec<WorkflowNode> = serde_json::from_str(&workflow_json)?;
//! let node_names: Vec<String> = nodes.iter().map(|n| n.name.clone()).collect();
//!
//! let subgraph = SubgraphDefinition { nodes, node_names };
//! let result = Extractor::builder(subgraph).build().extract()?;
//!
//! for (variable, expression) in &result.variables {
//!     println!("{} <- {}", variable, expression);
//! }
//! # Ok(())
//! # }
//! ```

// Core extraction
pub use crate::extractor::{
    ExtractionResult, Extractor, ExtractorBuilder, extract_references_in_node_expressions,
};

// Subgraph model
pub use crate::subgraph::{ExtractionArtifact, IntoSubgraph, SubgraphDefinition, WorkflowNode};

// Pattern helpers, usable independently
pub use crate::pattern::{
    apply_access_patterns, backslash_escape, dollar_escape, has_dot_notation_banned_char,
};
pub use crate::resolver::sanitize_node_name;
pub use crate::scanner::Accessor;

// Error types
pub use crate::error::{ArtifactError, ExtractionError, SubgraphConversionError};

// Commonly used collections
pub use indexmap::IndexMap;
pub use std::collections::HashMap;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
