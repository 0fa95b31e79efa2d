use casefold_core::cli::{self, OutputFormat};
use casefold_core::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "casefold",
    version,
    about = "Casefold: case-insensitive request path rewriting"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a casefold config file
    Check {
        /// Path to the casefold config file
        #[arg(long, default_value = "config/casefold.hcl")]
        config: PathBuf,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show how request paths would be rewritten
    Rewrite {
        /// Path to the casefold config file
        #[arg(long, default_value = "config/casefold.hcl")]
        config: PathBuf,

        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Request paths, e.g. /Scripts/MyScript.bat
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging();

    let result = match args.command {
        Command::Check { config, format } => cli::check::check(&config, format),
        Command::Rewrite {
            config,
            format,
            paths,
        } => cli::rewrite::rewrite(&config, &paths, format).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        // Loaded, but with warnings.
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!(error = %e, "casefold command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
