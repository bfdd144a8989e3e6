use clap::Parser;
use kirinuki::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::json;
use std::fs;

/// A CLI tool to generate sample workflow JSON for the Kirinuki extractor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// The number of nodes to generate
    #[arg(long, default_value_t = 12)]
    nodes: usize,

    /// The maximum number of cross-node references per node
    #[arg(long, default_value_t = 3)]
    max_refs: usize,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.nodes < 2 {
        eprintln!("Error: --nodes must be at least 2 to produce cross references");
        std::process::exit(1);
    }

    println!(
        "Generating workflow with {} node(s), up to {} reference(s) each...",
        cli.nodes, cli.max_refs
    );

    let nodes = generate_nodes(&mut rng, cli.nodes, cli.max_refs);

    let workflow = json!({
        "name": "Generated workflow",
        "nodes": nodes,
    });
    let json_output = serde_json::to_string_pretty(&workflow)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

const FIELDS: &[&str] = &["status", "orderId", "customer", "total", "payload", "createdAt"];
const ACCESSORS: &[&str] = &[".item", ".first()", ".last()"];

/// Generates nodes whose parameters reference earlier nodes, so extracting a
/// suffix of the list always yields external references.
fn generate_nodes(rng: &mut ThreadRng, count: usize, max_refs: usize) -> Vec<WorkflowNode> {
    let names: Vec<String> = (1..=count).map(|index| format!("Node {}", index)).collect();

    let mut nodes = Vec::with_capacity(count);
    for (index, name) in names.iter().enumerate() {
        let mut node = WorkflowNode::new(name.clone());

        let reference_count = if index == 0 {
            0
        } else {
            rng.random_range(0..=max_refs)
        };
        for parameter_index in 0..reference_count {
            let target = &names[rng.random_range(0..index)];
            let field = FIELDS[rng.random_range(0..FIELDS.len())];
            let accessor = ACCESSORS[rng.random_range(0..ACCESSORS.len())];
            node.parameters.insert(
                format!("p{}", parameter_index),
                json!(format!(
                    "={{{{ $(\"{}\"){}.json.{} }}}}",
                    target, accessor, field
                )),
            );
        }

        node.extra.insert("id".to_string(), json!(format!("{:08}", index + 1)));
        nodes.push(node);
    }

    let total_references: usize = nodes.iter().map(|node| node.parameters.len()).sum();
    println!(
        "-> Generated {} node(s) carrying {} cross reference(s).",
        nodes.len(),
        total_references
    );

    nodes
}
