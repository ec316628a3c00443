use crate::tracing::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schematic-search")]
#[command(about = "Index wiring-diagram text and search it by component name", long_about = None)]
pub struct Cli {
    /// TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Index a document from its extracted page dump
    Index { document: String },
    /// Search one document
    Search {
        document: String,
        keyword: String,
        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search every known document
    SearchAll { keyword: String },
    /// List indexed and specialized documents
    List,
}
