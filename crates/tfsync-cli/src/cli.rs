use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "tfsync",
    about = "tfsync — reconcile Terraform resource state",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail when any warning is reported
    #[arg(long, global = true)]
    pub deny_warnings: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge newly observed state into last-known state
    Merge(MergeArgs),
    /// Print the order-insensitive key for a set of strings
    Key(KeyArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// Last-known state (JSON)
    #[arg(long)]
    pub old: PathBuf,
    /// Newly observed state (JSON)
    #[arg(long)]
    pub new: PathBuf,
    /// Object type in Terraform's JSON type encoding
    #[arg(long)]
    pub schema: PathBuf,
}

#[derive(Args)]
pub struct KeyArgs {
    #[arg(required = true)]
    pub items: Vec<String>,
}
