//! # itemforge Command Line
//!
//! Samples items, dumps the catalog, or prints icon prompts.

use clap::{Args as ClapArgs, Parser, Subcommand};
use itemforge::config::{DEFAULT_SAMPLE_COUNT, MAX_SAMPLE_COUNT};
use itemforge::generation::utils;
use itemforge::{
    add_items_to_inventory, icon_filename, icon_prompt, Catalog, GenerationConfig, Generator,
    Inventory, ItemGenerator, ItemforgeError, ItemforgeResult,
};
use log::{debug, error, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments for itemforge.
#[derive(Parser, Debug)]
#[command(name = "itemforge")]
#[command(about = "Sample item data for icon generation pipelines")]
#[command(version)]
struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw random items and add them to a fresh inventory
    Sample {
        /// Number of items to draw
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT as i64, allow_negative_numbers = true)]
        count: i64,

        /// Random seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        source: CatalogSource,
    },
    /// Print the catalog as JSON
    Catalog {
        #[command(flatten)]
        source: CatalogSource,
    },
    /// Print `filename<TAB>prompt` for every catalog entry
    Prompts {
        #[command(flatten)]
        source: CatalogSource,
    },
}

#[derive(ClapArgs, Debug)]
struct CatalogSource {
    /// JSON catalog file to use instead of the built-in potions
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl CatalogSource {
    fn load(&self) -> ItemforgeResult<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    debug!("Starting itemforge v{}", itemforge::VERSION);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes env_logger; `RUST_LOG` wins over the flag when set.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

fn run(command: Command) -> ItemforgeResult<()> {
    match command {
        Command::Sample {
            count,
            seed,
            pretty,
            source,
        } => run_sample(count, seed, pretty, &source),
        Command::Catalog { source } => {
            println!("{}", source.load()?.to_json()?);
            Ok(())
        }
        Command::Prompts { source } => {
            for item in source.load()?.iter() {
                println!("{}\t{}", icon_filename(&item.name), icon_prompt(item));
            }
            Ok(())
        }
    }
}

fn run_sample(count: i64, seed: Option<u64>, pretty: bool, source: &CatalogSource) -> ItemforgeResult<()> {
    check_count_limit(count)?;
    let mut config = GenerationConfig::from_signed_count(count)?;
    config.seed = seed;

    let generator = ItemGenerator::new(source.load()?);
    let mut rng = utils::create_rng(&config);
    let items = generator.generate(&config, &mut rng)?;

    let json = if pretty {
        serde_json::to_string_pretty(&items)?
    } else {
        serde_json::to_string(&items)?
    };

    let mut inventory = Inventory::new();
    add_items_to_inventory(&mut inventory, items);
    info!("Inventory now holds {} items", inventory.len());

    println!("{}", json);
    Ok(())
}

/// Caps the count; the sign is checked by the library.
fn check_count_limit(count: i64) -> ItemforgeResult<()> {
    if count > MAX_SAMPLE_COUNT as i64 {
        return Err(ItemforgeError::InvalidArgument(format!(
            "count must be at most {}, got {}",
            MAX_SAMPLE_COUNT, count
        )));
    }

    Ok(())
}
