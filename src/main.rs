use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the rules and write them into a profile
    Generate(cmd::generate::GenerateArgs),
    /// Show the key groups a variant produces
    Combos(cmd::combos::CombosArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so a dry run can be piped.
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => {
            // Flags such as --simultaneous-threshold-ms live in the subcommand's matches.
            let sub_matches = matches
                .subcommand_matches("generate")
                .unwrap_or(&matches);
            cmd::generate::run(args, sub_matches)
        }
        Commands::Combos(args) => cmd::combos::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
