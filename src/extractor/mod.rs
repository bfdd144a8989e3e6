use crate::error::ExtractionError;
use crate::resolver::{ReferenceSignature, VariableResolver};
use crate::scanner::{ReferenceOccurrence, Scanner};
use crate::subgraph::{SubgraphDefinition, WorkflowNode};
use ahash::AHashSet;
use indexmap::IndexMap;

mod rewrite;

/// The outcome of one extraction run: the rewritten subgraph nodes and the
/// ordered `variable name -> original expression text` map describing the
/// entry node's input fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub nodes: Vec<WorkflowNode>,
    pub variables: IndexMap<String, String>,
}

/// One parameter's scan outcome, held between the scan and rewrite passes.
/// External occurrences carry their assigned variable name.
struct ScannedParameter {
    node_index: usize,
    key: String,
    occurrences: Vec<(ReferenceOccurrence, Option<String>)>,
}

pub struct Extractor {
    subgraph: SubgraphDefinition,
    start_node_name: String,
}

pub struct ExtractorBuilder {
    subgraph: SubgraphDefinition,
    start_node_name: String,
}

impl ExtractorBuilder {
    pub fn new(subgraph: SubgraphDefinition) -> Self {
        Self {
            subgraph,
            start_node_name: "Start".to_string(),
        }
    }

    /// Overrides the name given to the synthetic entry node.
    pub fn start_node_name(mut self, name: impl Into<String>) -> Self {
        self.start_node_name = name.into();
        self
    }

    pub fn build(self) -> Extractor {
        Extractor {
            subgraph: self.subgraph,
            start_node_name: self.start_node_name,
        }
    }
}

impl Extractor {
    pub fn builder(subgraph: SubgraphDefinition) -> ExtractorBuilder {
        ExtractorBuilder::new(subgraph)
    }

    /// Runs the extraction: validates the subgraph, scans every string
    /// parameter for references, assigns variable names to external ones and
    /// rewrites them against the entry node. Internal references are left
    /// byte-identical. Fails without partial results on an inconsistent
    /// graph.
    pub fn extract(mut self) -> Result<ExtractionResult, ExtractionError> {
        let subgraph_names: AHashSet<String> = self
            .subgraph
            .nodes
            .iter()
            .map(|node| node.name.clone())
            .collect();

        if subgraph_names.contains(&self.start_node_name) {
            return Err(ExtractionError::StartNameConflict {
                start_node_name: self.start_node_name.clone(),
            });
        }
        let universe: AHashSet<&str> = self
            .subgraph
            .node_names
            .iter()
            .map(String::as_str)
            .collect();
        for node in &self.subgraph.nodes {
            if !universe.contains(node.name.as_str()) {
                return Err(ExtractionError::NodeNotInWorkflow {
                    node_name: node.name.clone(),
                });
            }
        }

        let scanner = Scanner::new(&self.subgraph.node_names, &subgraph_names);

        // Scan pass: classify every occurrence and assign variable names
        // before any text is touched.
        let mut resolver = VariableResolver::new();
        let mut scanned: Vec<ScannedParameter> = Vec::new();
        for (node_index, node) in self.subgraph.nodes.iter().enumerate() {
            for (key, value) in &node.parameters {
                let Some(text) = value.as_str() else {
                    continue;
                };
                if let Some(referenced_name) = scanner.find_unknown_reference(text) {
                    return Err(ExtractionError::UnknownNodeReference {
                        node_name: node.name.clone(),
                        parameter: key.clone(),
                        referenced_name,
                    });
                }
                let occurrences = scanner.scan(text);
                if occurrences.is_empty() {
                    continue;
                }
                let named = occurrences
                    .into_iter()
                    .map(|occurrence| {
                        let variable = (!occurrence.internal).then(|| {
                            let signature = ReferenceSignature {
                                node_name: occurrence.referenced_node.clone(),
                                field_path: occurrence.field_path.clone(),
                                accessor: occurrence.accessor.clone(),
                            };
                            resolver.resolve(&signature, &occurrence.raw)
                        });
                        (occurrence, variable)
                    })
                    .collect();
                scanned.push(ScannedParameter {
                    node_index,
                    key: key.clone(),
                    occurrences: named,
                });
            }
        }

        #[cfg(feature = "debug-tools")]
        self.write_scan_report(&scanned);

        // Rewrite pass: splice the assigned references into the parameters.
        for parameter in scanned {
            let node = &mut self.subgraph.nodes[parameter.node_index];
            let Some(value) = node.parameters.get_mut(&parameter.key) else {
                continue;
            };
            let Some(text) = value.as_str() else { continue };
            let rewritten =
                rewrite::rewrite_parameter(text, &parameter.occurrences, &self.start_node_name);
            *value = serde_json::Value::String(rewritten);
        }

        Ok(ExtractionResult {
            nodes: self.subgraph.nodes,
            variables: resolver.into_variables(),
        })
    }

    #[cfg(feature = "debug-tools")]
    fn write_scan_report(&self, scanned: &[ScannedParameter]) {
        use std::fmt::Write as _;

        let mut report = String::new();
        for parameter in scanned {
            let node = &self.subgraph.nodes[parameter.node_index];
            let _ = writeln!(report, "node '{}' parameter '{}':", node.name, parameter.key);
            for (occurrence, variable) in &parameter.occurrences {
                let target = variable.as_deref().unwrap_or("<internal>");
                let _ = writeln!(
                    report,
                    "  [{}..{}] {} -> {}",
                    occurrence.span.start, occurrence.span.end, occurrence.raw, target
                );
            }
        }
        if let Err(e) = std::fs::create_dir_all("tmp")
            .and_then(|_| std::fs::write("tmp/extraction_scan_report.txt", &report))
        {
            eprintln!("Warning: could not write scan report: {}", e);
        }
    }
}

/// Convenience wrapper over [`Extractor`] for callers that already hold the
/// three raw inputs.
pub fn extract_references_in_node_expressions(
    nodes: Vec<WorkflowNode>,
    node_names: Vec<String>,
    start_node_name: &str,
) -> Result<ExtractionResult, ExtractionError> {
    Extractor::builder(SubgraphDefinition { nodes, node_names })
        .start_node_name(start_node_name)
        .build()
        .extract()
}
