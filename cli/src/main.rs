mod error_formatter;
mod formatter;
mod interactive;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fizzbuzz::{Builder, FizzBuzz};
use formatter::Formatter;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fizzbuzz")]
#[command(about = "FizzBuzz with override rules and statistics.")]
#[command(
    long_about = "Counts over a range of positive numbers replacing multiples of 3 with fizz, multiples of 5 with buzz and multiples of both with fizzbuzz.\nOptional override rules such as luck take precedence over the core rules."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate FizzBuzz output for a range
    ///
    /// Replaces every number of the inclusive range with its fizz, buzz or fizzbuzz
    /// label. Override rules are applied before the core rules.
    Run {
        /// First number of the range (must be positive)
        #[arg(short = 'f', long, default_value_t = 1, allow_negative_numbers = true)]
        from: i64,
        /// Last number of the range, inclusive (must be positive)
        #[arg(short = 't', long, default_value_t = 20, allow_negative_numbers = true)]
        to: i64,
        /// Add the LUCK override rule: numbers containing a 3 become luck
        #[arg(short = 'l', long)]
        luck: bool,
        /// Append label statistics to the output
        #[arg(short = 's', long)]
        stats: bool,
        /// Output the generated text only, without banner
        #[arg(short = 'r', long, conflicts_with = "json")]
        raw: bool,
        /// Output a JSON report instead of text
        #[arg(long)]
        json: bool,
        /// Prompt for the range and options
        #[arg(short = 'i', long, conflicts_with_all = ["from", "to", "luck", "stats"])]
        interactive: bool,
    },
    /// List rules in order of precedence
    ///
    /// Override rules come first, followed by the core rules.
    Rules {
        /// Include the LUCK override rule
        #[arg(short = 'l', long)]
        luck: bool,
    },
}

/// Options for a single game, from flags or interactive prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    pub from: i64,
    pub to: i64,
    pub luck: bool,
    pub statistics: bool,
}

impl GameSettings {
    pub fn builder(&self) -> Builder {
        let mut builder = FizzBuzz::builder().from(self.from).to(self.to);
        if self.luck {
            builder = builder.with_luck_rule();
        }
        if self.statistics {
            builder = builder.with_statistics();
        }
        builder
    }
}

#[derive(Debug, Clone, Copy)]
enum OutputMode {
    Text,
    Raw,
    Json,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run {
            from,
            to,
            luck,
            stats,
            raw,
            json,
            interactive,
        } => {
            let mode = if *json {
                OutputMode::Json
            } else if *raw {
                OutputMode::Raw
            } else {
                OutputMode::Text
            };
            let settings = GameSettings {
                from: *from,
                to: *to,
                luck: *luck,
                statistics: *stats,
            };
            run_command(settings, mode, *interactive)
        }
        Commands::Rules { luck } => rules_command(*luck),
    };

    if let Err(e) = result {
        if let Some(fizzbuzz_err) = e.downcast_ref::<fizzbuzz::FizzBuzzError>() {
            eprintln!("{}", error_formatter::format_error(fizzbuzz_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "fizzbuzz=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(settings: GameSettings, mode: OutputMode, interactive: bool) -> Result<()> {
    let settings = if interactive {
        interactive::run_interactive()?
    } else {
        settings
    };
    debug!(?settings, ?mode, "running game");

    let fizzbuzz = settings.builder().build()?;
    let formatter = Formatter::default();

    match mode {
        OutputMode::Text => print!("{}", formatter.format_output(&fizzbuzz)),
        OutputMode::Raw => println!("{}", fizzbuzz.output()),
        OutputMode::Json => println!("{}", formatter.format_report(&fizzbuzz.report())?),
    }

    Ok(())
}

fn rules_command(luck: bool) -> Result<()> {
    let mut builder = FizzBuzz::builder();
    if luck {
        builder = builder.with_luck_rule();
    }
    let fizzbuzz = builder.build()?;

    let formatter = Formatter::default();
    print!("{}", formatter.format_rules(&fizzbuzz));

    Ok(())
}
