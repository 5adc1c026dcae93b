//! Syllacue command-line entry point

use anyhow::Result;
use clap::Parser;
use syllacue_cli::commands::Commands;

/// Maximal-onset syllabification and NDL cue formatting
#[derive(Debug, Parser)]
#[command(name = "syllacue", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("Arguments: {:?}", cli);

    cli.command.execute(cli.quiet)
}
