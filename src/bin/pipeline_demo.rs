// Walk through the chaniter combinators on small inputs.
//
// Usage: pipeline_demo [stage-config.toml]
// Set RUST_LOG=chaniter=debug to watch stage threads start and stop.

use std::collections::HashMap;
use std::env;
use std::process::ExitCode;

use chaniter::{Iter, StageConfig};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold().cyan());
}

fn load_config() -> Result<StageConfig, chaniter::IterError> {
    match env::args().nth(1) {
        Some(path) => StageConfig::load(path),
        None => Ok(StageConfig::default()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::FAILURE;
        }
    };
    println!("stage config: {config:?}");

    heading("Filter and map");
    let squares = Iter::configured(config.clone(), 1..=6)
        .filter(|i| i % 2 == 0)
        .map(|i| i * i)
        .collect();
    println!("even squares of 1..=6: {squares:?}");

    heading("Sources");
    let scores: HashMap<&str, u32> = [("ada", 3), ("brian", 5), ("grace", 8)].into();
    let mut entries = Iter::from_map(scores).map(|p| p.to_string()).collect();
    entries.sort();
    println!("map entries (sorted): {}", entries.join(" "));

    heading("Two inputs");
    let zipped = Iter::new([1, 2, 3]).zip(Iter::new(['a', 'b'])).join(" ");
    println!("zip: {zipped}");
    let woven = Iter::new([1, 2, 3]).interleave(Iter::new([10, 20, 30, 40, 50])).collect();
    println!("interleave: {woven:?}");
    let product = Iter::new(["x", "y"]).cartesian_product(Iter::new([1, 2, 3])).count();
    println!("cartesian product of 2 and 3 elements: {product} pairs");

    heading("Grouping");
    let signs = Iter::new([-2, -1, 1, 2, 3, -4, -5, 7, 8]).group_by(|v| *v > 0);
    println!("runs by sign: {signs:?}");
    println!("chunks of 4: {:?}", Iter::new(1..=10).chunks(4));
    match Iter::new(1..=5).windows(3) {
        Ok(windows) => println!("windows of 3: {windows:?}"),
        Err(err) => println!("windows failed: {}", err.to_string().red()),
    }

    heading("Stopping early");
    let first_big = Iter::new(0u64..).map(|v| v * v).find(|v| *v > 1_000);
    println!("first square above 1000: {first_big:?}");
    let spaced = Iter::new(1..).step_by(25).map(|it| it.take(4).join(", "));
    match spaced {
        Ok(line) => println!("every 25th number: {line}"),
        Err(err) => println!("step_by failed: {}", err.to_string().red()),
    }

    println!("\n{}", "done".green());
    ExitCode::SUCCESS
}
