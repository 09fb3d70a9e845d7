use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxh::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxh::AppCommand {
    fn from(cmd: Commands) -> fxh::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                save,
                swap,
            } => fxh::AppCommand::Convert {
                amount,
                from,
                to,
                save,
                swap,
            },
            Commands::History => fxh::AppCommand::History,
            Commands::Clear => fxh::AppCommand::Clear,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert
        amount: String,
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Save the conversion to history
        #[arg(short, long)]
        save: bool,
        /// Convert in the opposite direction instead
        #[arg(long)]
        swap: bool,
    },
    /// Display saved conversions
    History,
    /// Delete all saved conversions
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxh::cli::setup::setup(),
        Some(cmd) => fxh::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
