use clap::Parser;
use kirinuki::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match a workflow export and are only used here for conversion.

#[derive(Deserialize)]
struct RawWorkflow {
    #[serde(default)]
    name: Option<String>,
    nodes: Vec<WorkflowNode>,
}

/// A workflow export plus the names of the nodes selected for extraction.
struct WorkflowSelection {
    workflow: RawWorkflow,
    selected: Vec<String>,
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON model to Kirinuki's
// canonical SubgraphDefinition.

impl IntoSubgraph for WorkflowSelection {
    fn into_subgraph(self) -> std::result::Result<SubgraphDefinition, SubgraphConversionError> {
        let node_names: Vec<String> = self
            .workflow
            .nodes
            .iter()
            .map(|node| node.name.clone())
            .collect();

        let mut nodes = Vec::new();
        for wanted in &self.selected {
            let node = self
                .workflow
                .nodes
                .iter()
                .find(|node| &node.name == wanted)
                .cloned()
                .ok_or_else(|| {
                    SubgraphConversionError::ValidationError(format!(
                        "Selected node '{}' does not exist in the workflow",
                        wanted
                    ))
                })?;
            nodes.push(node);
        }

        Ok(SubgraphDefinition { nodes, node_names })
    }
}

/// A reference extraction engine CLI for workflow subgraphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file
    workflow_path: Option<String>,

    /// Comma-separated names of the nodes to extract
    #[arg(short, long)]
    select: Option<String>,

    /// Name to give the synthetic entry node
    #[arg(short = 'n', long, default_value = "Start")]
    start_name: String,

    /// Optional path to write the extraction result JSON to
    #[arg(short, long)]
    output: Option<String>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli.start_name);
    } else {
        run_non_interactive(cli);
    }
}

fn run_extraction(
    workflow_path: String,
    selected: Vec<String>,
    start_name: String,
    output: Option<String>,
) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let workflow_json = fs::read_to_string(&workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &workflow_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let raw_workflow: RawWorkflow = serde_json::from_str(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow JSON: {}", e)));

    if let Some(name) = &raw_workflow.name {
        println!("Workflow: {}", name);
    }
    println!(
        "Extracting {} of {} node(s) behind entry node '{}'",
        selected.len(),
        raw_workflow.nodes.len(),
        start_name
    );

    let subgraph = WorkflowSelection {
        workflow: raw_workflow,
        selected,
    }
    .into_subgraph()
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert workflow: {}", e)));

    // --- 3. Extraction ---
    let extract_start = Instant::now();
    let result = Extractor::builder(subgraph)
        .start_node_name(&start_name)
        .build()
        .extract()
        .unwrap_or_else(|e| exit_with_error(&format!("Extraction failed: {}", e)));
    let extract_duration = extract_start.elapsed();

    // --- 4. Results and Summary ---
    println!("\nExtraction Finished!");
    if result.variables.is_empty() {
        println!("  -> No external references found; the subgraph is self-contained.");
    } else {
        println!(
            "  -> {} external reference(s) became entry node fields:",
            result.variables.len()
        );
        for (variable, expression) in &result.variables {
            println!("     {} <- {}", variable, expression);
        }
    }

    let result_json = serde_json::json!({
        "startNodeName": start_name,
        "nodes": result.nodes,
        "variables": result.variables,
    });
    if let Some(output_path) = output {
        let pretty = serde_json::to_string_pretty(&result_json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize result: {}", e)));
        fs::write(&output_path, pretty).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", output_path, e))
        });
        println!("  -> Wrote extraction result to '{}'", output_path);
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:    {:?}", load_duration);
    println!("Extraction:      {:?}", extract_duration);
    println!("---------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let workflow_path = cli.workflow_path.unwrap_or_else(|| {
        exit_with_error("Workflow path is required in non-interactive mode.");
    });
    let selected = cli.select.unwrap_or_else(|| {
        exit_with_error("--select is required in non-interactive mode.");
    });
    let selected: Vec<String> = selected
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if selected.is_empty() {
        exit_with_error("--select did not contain any node names.");
    }

    run_extraction(workflow_path, selected, cli.start_name, cli.output);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(default_start_name: String) {
    println!("--- Kirinuki Interactive Mode ---");

    let workflow_path = prompt_for_input("Enter workflow path", Some("data/workflow.json"));
    let selected_str = prompt_for_input("Enter node names to extract (comma-separated)", None);
    let selected: Vec<String> = selected_str
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    if selected.is_empty() {
        exit_with_error("No node names given.");
    }

    let start_name = prompt_for_input("Enter entry node name", Some(default_start_name.as_str()));
    let output_str = prompt_for_input("Enter output path (optional)", None);
    let output = if output_str.is_empty() {
        None
    } else {
        Some(output_str)
    };

    run_extraction(workflow_path, selected, start_name, output);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
