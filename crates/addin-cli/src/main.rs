//! `addin` - run the C++/JSON lexers and the include scanner on files.
//!
//! ```bash
//! addin highlight src/main.cpp
//! addin folds settings.json --format json
//! addin deps src/main.cpp --once
//! addin keyword constexpr --document src/main.cpp
//! addin types
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "addin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More logging (-v debug, -vv trace); `RUST_LOG` overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print color spans and end-of-line cookies for every line
    Highlight {
        file: PathBuf,

        /// Grammar to use instead of the one chosen by extension
        #[arg(short, long)]
        grammar: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print fold regions
    Folds {
        file: PathBuf,

        #[arg(short, long)]
        grammar: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List the local include dependencies of a C++ source, depth first
    Deps {
        file: PathBuf,

        /// Report each file at most once
        #[arg(long)]
        once: bool,

        /// Do not descend past this include depth
        #[arg(long)]
        max_depth: Option<usize>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Check whether a word is a keyword of the grammar owning a document
    Keyword {
        word: String,

        /// Document the word was found in
        #[arg(short, long)]
        document: PathBuf,
    },

    /// List registered file types
    Types {
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output = match cli.command {
        Commands::Highlight {
            file,
            grammar,
            format,
        } => commands::highlight(&file, grammar.as_deref(), format)?,
        Commands::Folds {
            file,
            grammar,
            format,
        } => commands::folds(&file, grammar.as_deref(), format)?,
        Commands::Deps {
            file,
            once,
            max_depth,
            format,
        } => commands::deps(&file, once, max_depth, format)?,
        Commands::Keyword { word, document } => commands::keyword(&word, &document),
        Commands::Types { format } => commands::types(format)?,
    };
    print!("{output}");
    Ok(())
}
