//! # envlayer demo application
//!
//! A sample CLI that shows how an app wires [envlayer](https://docs.rs/envlayer)
//! into its argument parser. It exists to demonstrate and manually verify the
//! layering rules.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example envlayer_demo -- files
//! cargo run --example envlayer_demo -- --env dev list
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                      | How to exercise it                                                   |
//! |------------------------------|----------------------------------------------------------------------|
//! | Candidate resolution         | `cargo run --example envlayer_demo -- --env dev files`               |
//! | Merged view (no env writes)  | `cargo run --example envlayer_demo -- --env dev list`                |
//! | Load into process env        | `cargo run --example envlayer_demo -- get DB_HOST`                   |
//! | Pre-existing vars win        | `DB_HOST=from-shell cargo run --example envlayer_demo -- get DB_HOST` |
//! | Custom base file             | `cargo run --example envlayer_demo -- --env-file app.env list`       |
//! | Disable `.local` overrides   | `cargo run --example envlayer_demo -- --no-local list`               |

use clap::{Parser, Subcommand};

use envlayer::{EnvArgs, EnvLayerBuilder};

/// envlayer demo: inspect and load a stack of .env files.
#[derive(Parser, Debug)]
#[command(name = "envlayer-demo")]
struct Cli {
    #[command(flatten)]
    env: EnvArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show each candidate file in priority order and whether it exists.
    Files,
    /// Print the merged key-value view without touching the environment.
    List,
    /// Load into the process environment, then print one key.
    Get {
        key: String,
        /// Printed when the key is unset or empty.
        #[arg(long)]
        default: Option<String>,
    },
}

fn show_files(builder: &EnvLayerBuilder) {
    for candidate in builder.candidates() {
        let marker = if candidate.path.is_file() { "found" } else { "-" };
        println!(
            "{:<17} {:<6} {}",
            format!("{:?}", candidate.kind),
            marker,
            candidate.path.display()
        );
    }
}

fn show_list(builder: &EnvLayerBuilder) {
    let merged = builder.load_and_return();
    let width = merged.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in &merged {
        println!("{key:<width$}  {value}");
    }
}

fn show_key(builder: &EnvLayerBuilder, key: &str, default: Option<&str>) {
    let report = builder.load_report();
    if !report.loaded() {
        eprintln!("no env files found");
    }
    if report.skipped_existing.iter().any(|k| k == key) {
        eprintln!("{key} was already set; file values ignored");
    }
    match envlayer::get(key).or_else(|| default.map(str::to_string)) {
        Some(value) => println!("{value}"),
        None => std::process::exit(1),
    }
}

fn main() {
    let cli = Cli::parse();
    let builder = cli.env.into_builder();

    match &cli.command {
        Commands::Files => show_files(&builder),
        Commands::List => show_list(&builder),
        Commands::Get { key, default } => show_key(&builder, key, default.as_deref()),
    }
}
