//! # sg CLI Entry Point
//!
//! This is the main executable for the `sg` command-line tool.
//! It parses CLI arguments using clap and routes commands to the library
//! handlers.
//!
//! ## Command Structure
//!
//! - **Manifest**: `manifest` - generate a CMake source-list file
//! - **Headers**: `headers` - stamp license headers onto header files
//! - **Board**: `board` - render a chessboard diagram comment
//! - **Shell**: `completion` - generate shell completion scripts

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use std::path::PathBuf;

use srcgen::board;
use srcgen::headers;
use srcgen::headers::brief::{ApiBrief, Brief, FilenameBrief};
use srcgen::manifest;

#[derive(Parser)]
#[command(name = "sg")]
#[command(about = "Codegen sidekick for C/C++ engine projects", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CMake source manifest from 'inc' and 'src' trees
    Manifest {
        /// Project root containing the 'inc' and 'src' folders
        root: PathBuf,
        /// Name of the output file
        #[arg(short, long, default_value = "sourcelist.cmake")]
        output: PathBuf,
        /// Identifier namespacing the generated CMake variables (e.g. ENGINE, TEST)
        #[arg(short, long, default_value = "ENGINE")]
        identifier: String,
    },
    /// Render a chessboard diagram comment from a position string
    Board {
        /// Position in FEN notation (empty board when omitted)
        #[arg(short, long, default_value = "")]
        fen: String,
        /// Do not copy the diagram to the clipboard
        #[arg(long)]
        no_copy: bool,
    },
    /// Stamp license headers onto header files that lack one
    Headers {
        /// Root directory to search for header files
        directory: PathBuf,
        /// Summarize file contents through an OpenAI-compatible endpoint
        #[arg(long)]
        use_ai: bool,
        /// API key (falls back to the OPENAI_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,
        /// Model used for summaries
        #[arg(long, default_value = "gpt-5-mini")]
        model: String,
    },
    /// Generate shell completion scripts
    Completion { shell: Shell },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Manifest {
            root,
            output,
            identifier,
        } => manifest::generate(root, output, identifier),

        Commands::Board { fen, no_copy } => board::run(fen, *no_copy),

        Commands::Headers {
            directory,
            use_ai,
            api_key,
            model,
        } => {
            let summarizer = resolve_summarizer(*use_ai, api_key.clone(), model);
            headers::run(directory, summarizer.as_ref())
        }

        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn resolve_summarizer(use_ai: bool, api_key: Option<String>, model: &str) -> Box<dyn Brief> {
    if use_ai {
        match api_key.or_else(|| std::env::var("OPENAI_API_KEY").ok()) {
            Some(key) if !key.is_empty() => {
                return Box::new(ApiBrief::new(key, model.to_string()));
            }
            _ => println!(
                "{} No API key available, falling back to filename briefs.",
                "!".yellow()
            ),
        }
    }
    Box::new(FilenameBrief)
}
