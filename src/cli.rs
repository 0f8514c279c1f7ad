use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "tokenomics",
    about = "Estimate LLM token counts and input-token cost for text",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a text file and print a tokenomics report
    #[command(alias = "r")]
    Report {
        /// Input text file (defaults to configured input_path)
        path: Option<PathBuf>,

        /// Model whose tokenizer to use
        #[arg(long)]
        model: Option<String>,

        /// Input-token price in USD per 1000 tokens
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Count tokens for a string, file, or stdin
    #[command(alias = "c")]
    Count {
        /// Text to tokenize (reads stdin when neither this nor --file is given)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Model whose tokenizer to use
        #[arg(long)]
        model: Option<String>,

        /// Input-token price in USD per 1000 tokens
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known encoding families and the models they cover
    Models,

    /// Write a default tokenomics.toml config file
    Init {
        /// Directory to write the config into
        #[arg(long)]
        root: Option<PathBuf>,

        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}
