use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "ndr")]
#[command(about = "Redact confidential details from NDA documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "NDR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact one or more documents (.txt, .md, .docx, .pdf)
    Redact {
        /// Source files or glob patterns (e.g. "contracts/*.docx")
        #[arg(required = true)]
        sources: Vec<String>,

        /// Client name to redact (repeatable)
        #[arg(short = 'n', long = "name")]
        names: Vec<String>,

        /// Comma-separated client names
        #[arg(long = "names", value_name = "LIST")]
        name_list: Option<String>,

        /// Output file (single source only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count the markers in an already redacted file
    Summary {
        /// Redacted text file
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Check a source/redacted pair against the hash log
    Verify {
        /// Original document
        source: PathBuf,

        /// Redacted output
        redacted: PathBuf,
    },

    /// Write the default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}
