//! Clientgen CLI
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod error;
mod ops;
mod utils;

#[cfg(test)]
mod test_helpers;

use clap::{Parser, Subcommand};
use commands::{generate, plan};

/// Clientgen CLI - Generate typed API clients from resolved API descriptions
#[derive(Parser)]
#[command(name = "clientgen")]
#[command(about = "Clientgen CLI - Generate typed API clients from resolved API descriptions", long_about = None)]
#[command(version = env!("CLIENTGEN_VERSION"))]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate client sources from an API description
    Generate {
        /// Path to the resolved API description (JSON or YAML)
        #[arg(long)]
        api: Option<String>,
        /// Output directory for generated files
        #[arg(long)]
        output: Option<String>,
        /// Package name of the generated code
        #[arg(long)]
        package: Option<String>,
        /// Target language (only "go" is supported)
        #[arg(long)]
        lang: Option<String>,
        /// Formatter program to pipe generated code through
        #[arg(long, conflicts_with = "no_format")]
        formatter: Option<String>,
        /// Skip formatting
        #[arg(long)]
        no_format: bool,
        /// Path to config file (default: .clientgen/config.yaml)
        #[arg(long)]
        config: Option<String>,
    },
    /// Show the template units a generate run would execute
    Plan {
        /// Package name of the generated code
        #[arg(long)]
        package: Option<String>,
        /// Path to config file (default: .clientgen/config.yaml)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let exit_code = match cli.command {
        Commands::Generate {
            api,
            output,
            package,
            lang,
            formatter,
            no_format,
            config,
        } => {
            let opts = generate::Options {
                api,
                output,
                package,
                language: lang,
                formatter,
                no_format,
                config,
            };
            generate::run(&opts)
        }
        Commands::Plan { package, config } => {
            let opts = plan::Options { package, config };
            plan::run(&opts)
        }
    };

    std::process::exit(exit_code);
}
