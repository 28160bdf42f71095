use std::fs;
use std::io::{self, Read};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod convert;
mod executor;
mod script;
mod speed;

/// Arbitrary-precision integer calculator.
#[derive(Parser)]
#[command(name = "radix")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Radix for numbers created by scripts and benchmarks.
    #[arg(long, global = true, env = "RADIX_BASE", default_value_t = radix_bignum::DEFAULT_BASE)]
    base: u64,
    /// Default log level when RUST_LOG is unset (error, warn, info, debug, trace).
    #[arg(long, global = true, env = "RADIX_LOG", default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and execute a script.
    Run {
        /// Script file (use - for stdin).
        #[arg(default_value = "-")]
        file: String,
        /// Abort after this many executed statements.
        #[arg(long)]
        max_steps: Option<u64>,
    },
    /// Print the raw digit dump of a decimal value in another base.
    Convert {
        /// Decimal value, optionally negative.
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Target base.
        #[arg(long)]
        to: u64,
    },
    /// Arithmetic throughput benchmark.
    Speed {
        /// Operation (add, mul, div, sqrt, pow, all).
        #[arg(default_value = "all")]
        operation: String,
        /// Operand size in digits of the selected base.
        #[arg(long, default_value = "32")]
        digits: usize,
        /// Duration in seconds per operation.
        #[arg(long, default_value = "3")]
        seconds: u64,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run_script(file: &str, base: u64, max_steps: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let source = if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(file)?
    };

    let script = script::parse(&source)?;
    if script.is_empty() {
        tracing::warn!(file, "script has no statements");
    }
    let stdout = io::stdout();
    let mut executor = executor::Executor::new(stdout.lock(), base)?.with_max_steps(max_steps);
    executor.run(&script)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result = match &cli.command {
        Commands::Run { file, max_steps } => run_script(file, cli.base, *max_steps),
        Commands::Convert { value, to } => convert::run(value, *to),
        Commands::Speed {
            operation,
            digits,
            seconds,
        } => speed::run(operation, *digits, *seconds, cli.base),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
