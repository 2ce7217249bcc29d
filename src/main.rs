use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nodepath::config::{Config, OutputFormat};
use nodepath::path::{escape_component, unescape_component, EmptyComponents, PathSyntax, TreePath};
use nodepath::store::loader::{load_store_file, load_store_from_stdin, InputFormat};

/// nodepath - split and walk dotted tree-node paths
#[derive(Parser)]
#[command(name = "nodepath")]
#[command(version)]
#[command(
    about = "Split and walk dotted tree-node paths with escaped delimiters",
    long_about = None
)]
struct Cli {
    /// Config file (default: ~/.config/nodepath/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Component delimiter, overrides the config file
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    /// Escape character, overrides the config file
    #[arg(short, long, global = true)]
    escape: Option<char>,

    /// Empty component handling: preserve, reject or collapse
    #[arg(long, global = true, value_parser = parse_policy)]
    empty_components: Option<EmptyComponents>,

    /// Print one JSON document per input instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the components of each path, escapes left in place
    Split {
        /// Paths to split (read from stdin when omitted and piped)
        paths: Vec<String>,
    },
    /// Print the parent of each path; nothing for root-level paths
    Parent { paths: Vec<String> },
    /// Print every ancestor of each path, nearest first
    Ancestors { paths: Vec<String> },
    /// Escape raw node names into single components
    Escape { names: Vec<String> },
    /// Recover raw node names from components
    Unescape { components: Vec<String> },
    /// Load a YAML/JSON document or path list and print the node stored at
    /// each path, or its nearest stored ancestor
    Lookup {
        /// Document (.yaml, .json) or path list (.paths, .txt), optionally
        /// .gz; `-` reads the store from stdin
        file: PathBuf,
        paths: Vec<String>,

        /// Store format when reading stdin: auto, document or paths
        #[arg(long, value_parser = parse_format, default_value = "auto")]
        format: InputFormat,
    },
}

/// Effective settings after merging the config file and CLI flags.
struct Settings {
    syntax: PathSyntax,
    policy: EmptyComponents,
    output: OutputFormat,
}

impl Settings {
    fn resolve(&self, path: &str) -> Result<TreePath> {
        TreePath::parse_with(path, &self.syntax, self.policy)
            .with_context(|| format!("Invalid path '{}'", path))
    }
}

fn parse_policy(s: &str) -> Result<EmptyComponents, String> {
    match s {
        "preserve" => Ok(EmptyComponents::Preserve),
        "reject" => Ok(EmptyComponents::Reject),
        "collapse" => Ok(EmptyComponents::Collapse),
        other => Err(format!(
            "unknown policy '{}' (expected preserve, reject or collapse)",
            other
        )),
    }
}

fn parse_format(s: &str) -> Result<InputFormat, String> {
    match s {
        "auto" => Ok(InputFormat::Auto),
        "document" => Ok(InputFormat::Document),
        "paths" => Ok(InputFormat::PathList),
        other => Err(format!(
            "unknown format '{}' (expected auto, document or paths)",
            other
        )),
    }
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    init_tracing(&config.log_level);

    // CLI flags override config
    let config =
        config.with_overrides(cli.delimiter, cli.escape, cli.empty_components, cli.json);
    let syntax = config.syntax()?;
    let settings = Settings {
        syntax,
        policy: config.empty_components,
        output: config.output,
    };
    debug!(?syntax, policy = ?settings.policy, "resolved settings");

    match cli.command {
        Command::Split { paths } => {
            for path in collect_inputs(paths)? {
                let tree_path = settings.resolve(&path)?;
                match settings.output {
                    OutputFormat::Text => {
                        for component in tree_path.components() {
                            println!("{}", component);
                        }
                    }
                    OutputFormat::Json => println!(
                        "{}",
                        json!({ "path": path, "components": tree_path.components() })
                    ),
                }
            }
        }
        Command::Parent { paths } => {
            for path in collect_inputs(paths)? {
                let parent = settings.resolve(&path)?.parent().map(|p| p.to_string());
                match settings.output {
                    OutputFormat::Text => {
                        if let Some(parent) = parent {
                            println!("{}", parent);
                        }
                    }
                    OutputFormat::Json => {
                        println!("{}", json!({ "path": path, "parent": parent }))
                    }
                }
            }
        }
        Command::Ancestors { paths } => {
            for path in collect_inputs(paths)? {
                let ancestors: Vec<String> = settings
                    .resolve(&path)?
                    .ancestors()
                    .map(|p| p.to_string())
                    .collect();
                match settings.output {
                    OutputFormat::Text => {
                        for ancestor in &ancestors {
                            println!("{}", ancestor);
                        }
                    }
                    OutputFormat::Json => {
                        println!("{}", json!({ "path": path, "ancestors": ancestors }))
                    }
                }
            }
        }
        Command::Escape { names } => {
            for name in collect_inputs(names)? {
                let component = escape_component(&name, &settings.syntax);
                print_pair(&settings, &name, &component, &component);
            }
        }
        Command::Unescape { components } => {
            for component in collect_inputs(components)? {
                let name = unescape_component(&component, &settings.syntax);
                print_pair(&settings, &name, &component, &name);
            }
        }
        Command::Lookup {
            file,
            paths,
            format,
        } => {
            // With the store on stdin, paths can only come from arguments
            let (store, paths) = if file.as_os_str() == "-" {
                (load_store_from_stdin(&settings.syntax, format)?, paths)
            } else {
                let store = load_store_file(&file, &settings.syntax)
                    .with_context(|| format!("Failed to load {}", file.display()))?;
                (store, collect_inputs(paths)?)
            };

            for path in paths {
                let path = settings.resolve(&path)?.to_string();
                let found = store.resolve(&path);
                match settings.output {
                    OutputFormat::Text => match found {
                        Some((key, node)) => println!(
                            "{}\t{}\t{}",
                            path,
                            key,
                            node.value.as_deref().unwrap_or("")
                        ),
                        None => println!("{}\t-", path),
                    },
                    OutputFormat::Json => {
                        let found =
                            found.map(|(key, node)| json!({ "path": key, "node": node }));
                        println!("{}", json!({ "path": path, "found": found }))
                    }
                }
            }
        }
    }

    Ok(())
}

/// Prints a name/component pair; text output shows only `converted`.
fn print_pair(settings: &Settings, name: &str, component: &str, converted: &str) {
    match settings.output {
        OutputFormat::Text => println!("{}", converted),
        OutputFormat::Json => {
            println!("{}", json!({ "name": name, "component": component }))
        }
    }
}

/// Returns `args`, or the non-empty lines of stdin when `args` is empty and
/// stdin is piped.
fn collect_inputs(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() || io::stdin().is_terminal() {
        return Ok(args);
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if !line.is_empty() {
            inputs.push(line);
        }
    }
    Ok(inputs)
}
