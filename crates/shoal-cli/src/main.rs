//! Shoal CLI - Parse, validate, and inspect shoal configuration files
//!
//! Usage:
//!   shoal [OPTIONS] <FILE>
//!
//! Commands:
//!   parse     Parse and display the configuration tree (default)
//!   validate  Check a file for errors
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use serde::Serialize;
use shoal_core::tree::{NodeData, ParamValue, TreeNode, TreeParam};
use shoal_core::Tree;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    match config.command {
        Command::Parse => cmd_parse(&input, &config),
        Command::Validate => cmd_validate(&input, &config),
        Command::Stats => cmd_stats(&input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    format: OutputFormat,
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Parse,
    Validate,
    Stats,
}

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Parse;
    let mut format = OutputFormat::Text;
    let mut verbose = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("shoal {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "-j" | "--json" => format = OutputFormat::Json,
            "parse" => command = Command::Parse,
            "validate" => command = Command::Validate,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        format,
        verbose,
    })
}

fn print_help() {
    eprintln!(
        r#"shoal - configuration file parser and validator

USAGE:
    shoal [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    parse       Parse and display the configuration tree (default)
    validate    Check a file for errors without output
    stats       Show document statistics

OPTIONS:
    -v, --verbose    Show the full configuration tree
    -j, --json       Output in JSON format
    -h, --help       Print help information
    -V, --version    Print version information

EXAMPLES:
    shoal service.shoal            Parse a configuration file
    shoal -v service.shoal         Parse with full tree output
    shoal -j service.shoal         Output the tree as JSON
    shoal validate service.shoal   Validate without output
    shoal stats service.shoal      Show document statistics
"#
    );
}

// =============================================================================
// Parse Command
// =============================================================================

fn cmd_parse(input: &str, config: &Config) -> Result<(), String> {
    let tree = shoal_core::parse(input).map_err(|e| e.to_string())?;

    match config.format {
        OutputFormat::Json => print_json(&tree),
        OutputFormat::Text => {
            if config.verbose {
                print_tree_verbose(&tree);
            } else {
                print_tree_summary(&tree);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Validate Command
// =============================================================================

fn cmd_validate(input: &str, config: &Config) -> Result<(), String> {
    match shoal_core::parse(input) {
        Ok(_) => {
            if matches!(config.format, OutputFormat::Json) {
                println!(r#"{{"valid": true}}"#);
            } else {
                println!("Valid: no errors found");
            }
            Ok(())
        }
        Err(error) => {
            if matches!(config.format, OutputFormat::Json) {
                println!("{}", serde_json::json!({
                    "valid": false,
                    "error": {
                        "message": error.message,
                        "line": error.position.line,
                        "column": error.position.column,
                    }
                }));
            } else {
                eprintln!("Invalid: {}", error);
            }
            Err(error.to_string())
        }
    }
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(input: &str) -> Result<(), String> {
    let tree = shoal_core::parse(input).map_err(|e| e.to_string())?;

    let stats = TreeStats::from_tree(&tree, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Structure:");
    println!("  Item sections:   {}", stats.items);
    println!("  List sections:   {}", stats.lists);
    println!("  List elements:   {}", stats.elements);
    println!("  Max depth:       {}", stats.max_depth);
    println!();
    println!("Parameters:");
    println!("  Scalar params:   {}", stats.scalar_params);
    println!("  List params:     {}", stats.list_params);
    println!();
    println!("Size:");
    println!("  Characters:      {}", stats.chars);
    println!("  Lines:           {}", stats.lines);

    Ok(())
}

struct TreeStats {
    items: usize,
    lists: usize,
    elements: usize,
    scalar_params: usize,
    list_params: usize,
    max_depth: usize,
    chars: usize,
    lines: usize,
}

impl TreeStats {
    fn from_tree(tree: &Tree, input: &str) -> Self {
        let mut stats = Self {
            items: 0,
            lists: 0,
            elements: 0,
            scalar_params: 0,
            list_params: 0,
            max_depth: 0,
            chars: input.len(),
            lines: input.lines().count(),
        };

        stats.count_node(tree.root(), 0);
        stats
    }

    fn count_node(&mut self, node: &TreeNode, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        match &node.data {
            NodeData::Item(item) => {
                if !node.is_root() {
                    self.items += 1;
                }
                for (_, param) in item.params() {
                    if param.is_list() {
                        self.list_params += 1;
                    } else {
                        self.scalar_params += 1;
                    }
                }
                for (_, node) in item.nodes() {
                    self.count_node(node, depth + 1);
                }
            }
            NodeData::List(list) => {
                self.lists += 1;
                for node in list.nodes() {
                    self.elements += 1;
                    self.count_node(node, depth + 1);
                }
            }
        }
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonNode<'a> {
    Item {
        params: Vec<JsonParam<'a>>,
        nodes: Vec<JsonNamedNode<'a>>,
    },
    List {
        elements: Vec<JsonNode<'a>>,
    },
}

#[derive(Serialize)]
struct JsonNamedNode<'a> {
    name: &'a str,
    #[serde(flatten)]
    node: JsonNode<'a>,
}

#[derive(Serialize)]
struct JsonParam<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<&'a [String]>,
}

fn print_json(tree: &Tree) {
    let json_tree = convert_node(tree.root());
    println!("{}", serde_json::to_string_pretty(&json_tree).unwrap());
}

fn convert_node<'a>(node: &'a TreeNode) -> JsonNode<'a> {
    match &node.data {
        NodeData::Item(item) => JsonNode::Item {
            params: item
                .params()
                .map(|(name, param)| JsonParam {
                    name,
                    value: param.value(),
                    values: param.value_list(),
                })
                .collect(),
            nodes: item
                .nodes()
                .map(|(name, node)| JsonNamedNode {
                    name,
                    node: convert_node(node),
                })
                .collect(),
        },
        NodeData::List(list) => JsonNode::List {
            elements: list.nodes().map(convert_node).collect(),
        },
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_tree_summary(tree: &Tree) {
    let root = match &tree.root().data {
        NodeData::Item(item) => item,
        NodeData::List(_) => return,
    };

    println!("Params: {}", root.params_count());
    for (name, param) in root.params() {
        println!("  {} = {}", name, format_param(param));
    }

    println!("Nodes: {}", root.nodes_count());
    for (i, (name, node)) in root.nodes().enumerate() {
        println!("  [{}] {}", i + 1, describe_node(name, node));
    }
}

fn print_tree_verbose(tree: &Tree) {
    println!("=== Configuration Tree ===");
    println!();
    print_node_verbose(tree.root(), 0);
}

fn describe_node(name: &str, node: &TreeNode) -> String {
    match &node.data {
        NodeData::Item(item) => format!(
            "{} (item, {} params, {} nodes)",
            name,
            item.params_count(),
            item.nodes_count()
        ),
        NodeData::List(list) => format!("{} (list, {} elements)", name, list.count()),
    }
}

fn print_node_verbose(node: &TreeNode, indent: usize) {
    let prefix = "  ".repeat(indent);

    match &node.data {
        NodeData::Item(item) => {
            for (name, param) in item.params() {
                println!("{}{} = {}", prefix, name, format_param(param));
            }
            for (name, child) in item.nodes() {
                println!("{}#{}:", prefix, name);
                print_node_verbose(child, indent + 1);
            }
        }
        NodeData::List(list) => {
            for (i, element) in list.nodes().enumerate() {
                println!("{}[{}]", prefix, i + 1);
                print_node_verbose(element, indent + 1);
            }
        }
    }
}

fn format_param(param: &TreeParam) -> String {
    match &param.value {
        ParamValue::Scalar(value) => format!("'{}'", value),
        ParamValue::List(values) => {
            let formatted: Vec<String> = values.iter().map(|v| format!("'{}'", v)).collect();
            format!("[{}]", formatted.join(", "))
        }
    }
}
