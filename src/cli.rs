use crate::core::readings::{DEFAULT_RPM, Reactivity, Symptom};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "officina",
    version,
    about = "Engineering-style stress check-up: how worn is your engine?"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate readings passed as flags
    Check(CheckArgs),
    /// Answer the check-up questions interactively
    Quiz(OutputArgs),
    /// List reactivity levels and symptoms with their CLI names
    Symptoms,
    /// Write a default officina.toml in the current directory
    Init,
}

#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Mental load on a 0-12 dial
    #[arg(long, default_value_t = DEFAULT_RPM, value_parser = clap::value_parser!(u8).range(0..=12))]
    pub rpm: u8,
    #[arg(long, value_enum, default_value_t = Reactivity::Normale)]
    pub reactivity: Reactivity,
    /// Repeat for each symptom
    #[arg(long = "symptom", value_enum)]
    pub symptoms: Vec<Symptom>,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    /// Overrides [assets].dir from the config file
    #[arg(long)]
    pub assets: Option<PathBuf>,
}
