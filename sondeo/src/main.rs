// sondeo/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs on stderr so stdout stays clean for tables and pipelines.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            project_dir,
            delegacion,
        } => commands::init::execute(project_dir, delegacion),

        Commands::Build { project_dir, out } => commands::build::execute(project_dir, out),

        Commands::Validate { project_dir } => commands::validate::execute(project_dir),

        Commands::Catalog {
            project_dir,
            action,
        } => commands::catalog::execute(project_dir, action),

        Commands::Preview {
            project_dir,
            sheet,
            limit,
        } => commands::preview::execute(project_dir, sheet, limit),
    }
}
