//! Command-line interface for mel
//! Parses mel programs and prints their syntax trees in one of the registered formats.
//!
//! Usage:
//!   mel parse `<path>` [--format `<format>`]  - Parse a file (`-` for stdin) and print its tree
//!   mel demo [--format `<format>`]            - Parse the built-in sample program
//!   mel list-formats                        - List all available output formats
//!
//! Logging goes to stderr and is controlled with `MEL_LOG` or `RUST_LOG` (e.g. `MEL_LOG=debug`).

use clap::{Arg, ArgMatches, Command};
use std::io::Read;
use tracing_subscriber::{fmt, EnvFilter};

use mel::mel::formats::FormatRegistry;
use mel::mel::parsing::parse;

const DEMO_SOURCE: &str = include_str!("../../docs/samples/000-demo.mel");

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (see `mel list-formats`)")
        .default_value("tree")
}

fn main() {
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("MEL_LOG")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = Command::new("mel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting the syntax trees of mel programs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("parse")
                .about("Parse a mel file and print its syntax tree")
                .arg(
                    Arg::new("path")
                        .help("Path to the mel file, or - to read stdin")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("demo")
                .about("Parse the built-in sample program")
                .arg(format_arg()),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            let path = required(parse_matches, "path");
            let source = read_source(path);
            handle_parse(path, &source, required(parse_matches, "format"));
        }
        Some(("demo", demo_matches)) => {
            handle_parse("<demo>", DEMO_SOURCE, required(demo_matches, "format"));
        }
        Some(("list-formats", _)) => handle_list_formats(),
        _ => unreachable!(),
    }
}

/// Arguments that are required or defaulted by clap are always present
fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn read_source(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        std::fs::read_to_string(path)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}

/// Handle the parse and demo commands
fn handle_parse(name: &str, source: &str, format: &str) {
    tracing::info!(source = name, format, "parsing");

    let program = parse(source).unwrap_or_else(|e| {
        eprintln!("{}:{}", name, e);
        std::process::exit(1);
    });

    let output = FormatRegistry::global()
        .serialize(&program, format)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
}

fn handle_list_formats() {
    let registry = FormatRegistry::global();
    println!("Available output formats:\n");
    for name in registry.list_formats() {
        let description = registry.get(&name).map(|f| f.description()).unwrap_or("");
        println!("  {}", name);
        println!("    {}", description);
    }
}
