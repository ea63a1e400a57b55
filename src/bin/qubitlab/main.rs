//! qubitlab Command-Line Interface
//!
//! Text front end for a single-qubit session: prepare a state, apply gates,
//! and compare sampled measurement statistics with the Born-rule prediction.

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use qubitlab::{DEFAULT_SHOTS, Gate, SimulatorConfig};

mod commands;

use commands::common::OutputFormat;
use commands::{repl, run};

/// qubitlab - prepare, evolve and measure a single qubit
#[derive(Parser)]
#[command(name = "qubitlab")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Shots per measurement run
    #[arg(long, default_value_t = DEFAULT_SHOTS, env = "QUBITLAB_SHOTS", global = true)]
    shots: usize,

    /// Seed for reproducible measurement runs
    #[arg(long, env = "QUBITLAB_SEED", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a qubit, apply gates, and print the statistics
    Run {
        /// Amplitude of |0⟩ (e.g. 1, 0.6, 1+2j)
        #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
        alpha: String,

        /// Amplitude of |1⟩
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        beta: String,

        /// Gate applied during initialization (NONE, H, X, Y, Z)
        #[arg(short, long, default_value = "NONE")]
        gate: Gate,

        /// Gate applied after initialization; repeat for a sequence
        #[arg(short = 'u', long = "apply")]
        apply: Vec<Gate>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Print the session report
        #[arg(long)]
        report: bool,

        /// Print the circuit diagram
        #[arg(long)]
        diagram: bool,
    },

    /// Interactive session reading commands from stdin
    Repl,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = SimulatorConfig::default().with_shots(cli.shots);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = match cli.command {
        Commands::Run {
            alpha,
            beta,
            gate,
            apply,
            format,
            report,
            diagram,
        } => run::execute(config, &alpha, &beta, gate, &apply, format, report, diagram),
        Commands::Repl => repl::execute(config),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
