//! CLI argument definitions for `vc-brief`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vc-brief",
    version,
    about = "VC Brief - inspect the investor dossier and export the newsletter",
    long_about = "Inspect the VC Brief investor dossier from the terminal.\n\n\
                  Validates the content document, searches its case, regulation,\n\
                  mandate and competitor collections, and exports the monthly\n\
                  investor newsletter as a PDF."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load and validate the content document.
    Validate(ValidateArgs),

    /// Search one of the dossier's collections.
    Search(SearchArgs),

    /// List the dossier tabs in display order.
    Tabs,

    /// Export the investor newsletter.
    Newsletter(NewsletterArgs),

    /// Print dossier tabs to a PDF.
    Dossier(DossierArgs),

    /// Inspect or clear the "intro seen" session flag.
    Intro {
        #[command(subcommand)]
        action: IntroAction,
    },
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Content document to validate instead of the embedded one.
    #[arg(long = "content", value_name = "PATH")]
    pub content: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive substring).
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Collection to search.
    #[arg(long = "in", value_enum, default_value = "cases")]
    pub collection: CollectionArg,

    /// Content document to search instead of the embedded one.
    #[arg(long = "content", value_name = "PATH")]
    pub content: Option<PathBuf>,
}

#[derive(Parser)]
pub struct NewsletterArgs {
    /// Where to write the PDF (default: the fixed file name in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a plain-text rendition instead of writing the PDF.
    #[arg(long = "preview", conflicts_with = "output")]
    pub preview: bool,
}

#[derive(Parser)]
pub struct DossierArgs {
    /// Where to write the PDF (default: the dossier file name in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Tab id to include, repeatable (default: every tab, in display order).
    #[arg(long = "tab", value_name = "ID")]
    pub tabs: Vec<String>,

    /// Content document to print instead of the embedded one.
    #[arg(long = "content", value_name = "PATH")]
    pub content: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroAction {
    /// Show whether the intro has been seen this session.
    Status,
    /// Clear the flag so the intro plays again.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CollectionArg {
    Cases,
    Regulations,
    Mandates,
    Competitors,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
