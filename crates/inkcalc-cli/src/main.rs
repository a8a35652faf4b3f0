mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "inkcalc",
    version,
    about = "Ink consumption and ink mix cost calculator for print jobs"
)]
struct Cli {
    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate ink consumption (and optionally run and mix cost) for one job
    Consume(commands::consume::ConsumeArgs),
    /// Cost, list and validate ink mixes
    Mix {
        #[command(subcommand)]
        action: MixAction,
    },
    /// Run a JSON array of calculation requests
    Batch {
        /// JSON file containing an array of requests
        input_file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "json", value_parser = ["json", "csv"])]
        output: String,

        /// Write output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Show the built-in reference tables
    Reference {
        #[command(subcommand)]
        action: ReferenceAction,
    },
}

#[derive(Subcommand)]
enum MixAction {
    /// Split a mix mass into colorants and price it
    Cost {
        /// Built-in preset name, e.g. "2945 C"
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        preset: Option<String>,

        /// Mix definition JSON file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Total mix mass in grams
        #[arg(short, long)]
        mass: Decimal,

        /// Unit-cost table (JSON, cost per gram) overriding catalog prices
        #[arg(long, value_name = "FILE")]
        costs: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "table", value_parser = ["table", "json"])]
        output: String,
    },
    /// List built-in mix presets
    Presets,
    /// Validate a mix definition file
    Validate {
        /// Path to mix JSON file
        file: PathBuf,
    },
    /// Print the mix definition schema with an example
    Schema,
}

#[derive(Subcommand)]
enum ReferenceAction {
    /// List printing methods and their density ranges
    Methods,
    /// List substrates and their consumption factors
    Substrates,
    /// List base colorants with price ranges
    Colorants,
    /// Show typical coverage levels
    Coverage,
    /// Describe one printing method in detail
    Explain {
        /// Method key or name
        method: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Consume(args) => commands::consume::run(args),
        Commands::Mix { action } => match action {
            MixAction::Cost {
                preset,
                file,
                mass,
                costs,
                output,
            } => commands::mix::cost(preset, file, mass, costs, &output),
            MixAction::Presets => commands::mix::presets(),
            MixAction::Validate { file } => commands::mix::validate(&file),
            MixAction::Schema => commands::mix::schema(),
        },
        Commands::Batch {
            input_file,
            output,
            out,
        } => commands::batch::run(&input_file, &output, out),
        Commands::Reference { action } => match action {
            ReferenceAction::Methods => commands::reference::methods(),
            ReferenceAction::Substrates => commands::reference::substrates(),
            ReferenceAction::Colorants => commands::reference::colorants(),
            ReferenceAction::Coverage => commands::reference::coverage(),
            ReferenceAction::Explain { method } => commands::reference::explain(&method),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
