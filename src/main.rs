//! Runs the closure demos and prints their results.
//!
//! ```bash
//! closures
//! closures --config demo.json -v
//! closures --dump-config
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use closures::{make_adder, make_incrementer, mapstr, title, DemoConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "closures")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Closures and higher-order functions", long_about = None)]
struct Cli {
    /// JSON file overriding the demo parameters
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the configuration in use and exit
    #[arg(long)]
    dump_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn test_make_adder(config: &DemoConfig) {
    let add = make_adder(config.adder_offset);
    let n = config.adder_input;
    println!("n={}", n);
    println!("n={}", add(n));
}

fn test_make_incrementer(config: &DemoConfig) {
    let (inc_a, get_a) = make_incrementer();
    let (inc_b, get_b) = make_incrementer();
    for _ in 1..=config.rounds {
        inc_a(); // a is incremented once
        inc_b(); // b is incremented twice
        inc_b();
    }
    println!("get_a(): {}", get_a());
    println!("get_b(): {}", get_b());
}

fn test_mapstr(config: &DemoConfig) {
    println!("{:?}", config.words);
    let cap_words = mapstr(&config.words, title);
    println!("{:?}", cap_words);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DemoConfig::default(),
    };
    log::debug!("configuration: {:?}", config);

    if cli.dump_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    test_make_adder(&config);
    test_make_incrementer(&config);
    test_mapstr(&config);
    Ok(())
}
