mod cli;
mod config;
mod core;
mod utils;

use anyhow::Result;
use clap::Parser;
use cli::{CheckArgs, Cli, Commands, OutputArgs};
use config::Config;
use crate::core::readings::{EngineReading, Reactivity, Readings, Symptom};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("officina=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Quiz(args) => {
            let session = Session::resolve(args)?;
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            // keep stdout clean for the JSON document
            let readings = if session.json {
                core::quiz::collect(&mut input, &mut std::io::stderr())?
            } else {
                core::quiz::collect(&mut input, &mut std::io::stdout())?
            };
            session.report(&readings)
        }
        Commands::Symptoms => {
            print_catalog();
            Ok(0)
        }
        Commands::Init => {
            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_check(args: CheckArgs) -> Result<i32> {
    let readings = Readings {
        engine: EngineReading::new(args.rpm)?,
        reactivity: args.reactivity,
        symptoms: args.symptoms.into_iter().collect(),
    };
    Session::resolve(args.output)?.report(&readings)
}

struct Session {
    config: Config,
    cwd: PathBuf,
    json: bool,
}

impl Session {
    fn resolve(args: OutputArgs) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let mut loaded = config::load_config(args.config.as_deref(), &cwd)?;
        if let Some(assets) = args.assets {
            loaded.config.assets.dir = assets;
        }
        tracing::debug!(source = ?loaded.source, "config resolved");

        let json = args.json || loaded.config.general.json;
        Ok(Self {
            config: loaded.config,
            cwd,
            json,
        })
    }

    fn report(&self, readings: &Readings) -> Result<i32> {
        let report = core::evaluate(readings, &self.config, &self.cwd);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if self.json {
            core::report::write_json(&mut out, &report)?;
        } else {
            core::report::write_human(&mut out, &report)?;
        }
        out.flush()?;

        Ok(0)
    }
}

fn print_catalog() {
    println!("Reattività (--reactivity):");
    for reactivity in Reactivity::ALL {
        println!("  {:<20} {}", reactivity.cli_name(), reactivity.label());
    }
    println!();
    println!("Sintomi (--symptom):");
    for symptom in Symptom::ALL {
        println!("  {:<20} {}", symptom.cli_name(), symptom.label());
    }
}
