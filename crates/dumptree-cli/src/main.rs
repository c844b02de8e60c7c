//! `dumptree` CLI: turn `toString()` dumps from logs into JSON trees.
//!
//! ## Usage
//!
//! ```sh
//! # Parse a dump from stdin, print pretty JSON
//! echo 'User(id=1, tags=[a, b])' | dumptree parse
//!
//! # From file to file, compact JSON
//! dumptree parse -i line.log -o tree.json --compact
//!
//! # Normalize the dump itself instead of converting it
//! dumptree parse --format dump -i line.log
//!
//! # Show node counts and nesting depth
//! dumptree stats -i line.log
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dumptree_core::{ParseOptions, TreeStats, DEFAULT_MAX_DEPTH};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "dumptree",
    version,
    about = "Parse toString()-style object dumps into inspectable trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a dump and print the resulting tree
    Parse {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Single-line JSON instead of indented
        #[arg(long)]
        compact: bool,
        /// Nesting depth past which lists and objects are kept as text
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: usize,
    },
    /// Show object, list and scalar counts and nesting depth
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON, objects rendered as {"Name": {fields}}
    Json,
    /// Normalized dump notation
    Dump,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Re-parse with --help to show usage (clap handles this)
            Cli::parse_from(["dumptree", "--help"]);
            unreachable!();
        }
    };

    match command {
        Commands::Parse {
            input,
            output,
            format,
            compact,
            max_depth,
        } => {
            let text = read_input(input.as_deref())?;
            let options = ParseOptions::default().with_max_depth(max_depth);
            let tree = dumptree_core::parse_with_options(text.trim(), options);
            log::debug!("parsed {} root from {} bytes", tree.type_name(), text.len());

            let rendered = match format {
                Format::Json if compact => dumptree_core::to_json_string(&tree)
                    .context("Failed to render tree as JSON")?,
                Format::Json => dumptree_core::to_json_pretty(&tree)
                    .context("Failed to render tree as JSON")?,
                Format::Dump => tree.to_string(),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Stats { input } => {
            let text = read_input(input.as_deref())?;
            let tree = dumptree_core::parse(text.trim());
            let stats = TreeStats::of(&tree);
            println!("Root:       {}", tree.type_name());
            println!("Objects:    {}", stats.objects);
            println!("Lists:      {}", stats.lists);
            println!("Scalars:    {}", stats.scalars);
            println!("Max depth:  {}", stats.max_depth);
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logger::SimpleLogger::new()
        .with_level(level)
        .init()
        .context("Failed to initialize logging")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
