use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use std::path::PathBuf;

use jsonexplorer::config::Config;
use jsonexplorer::file::loader::{load_json_file, load_json_from_stdin, load_json_str};
use jsonexplorer::output::render_table;
use jsonexplorer::query::{flatten_results, Query};

/// jsonexplorer - Get only the part of JSON data matching a query
#[derive(Parser)]
#[command(name = "jsonexplorer")]
#[command(version)]
#[command(about = "Get only the part of JSON data matching a query", long_about = None)]
struct Cli {
    /// Query to run, e.g. object.*.{name,"last name"}
    key: String,

    /// Log parsing and evaluation steps
    #[arg(short, long)]
    verbose: bool,

    /// Raw JSON data
    #[arg(long, conflicts_with = "input_file")]
    input: Option<String>,

    /// Path to a JSON file (.gz, .jsonl and .ndjson are understood)
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    raw: bool,

    /// Config file to use instead of ~/.config/jsonexplorer/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    debug!("using {:?}", config);

    // Parse the query first so a bad query fails before any input is read.
    let query = Query::parse(&cli.key).with_context(|| format!("Invalid query '{}'", cli.key))?;

    let data = if let Some(raw) = &cli.input {
        load_json_str(raw)?
    } else if let Some(path) = &cli.input_file {
        load_json_file(path)?
    } else {
        load_json_from_stdin()?
    };

    let result = query
        .evaluate(&data)
        .with_context(|| format!("Query '{}' does not match the input", cli.key))?;

    if cli.raw {
        println!("{}", result.to_json_pretty());
    } else {
        print!("{}", render_table(&flatten_results(&result), &config));
    }

    Ok(())
}
