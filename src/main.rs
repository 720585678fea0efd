use clap::Parser;
use tracing_subscriber::EnvFilter;

use edit_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("edit_solver=debug,info")
    } else {
        EnvFilter::new("edit_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Distance(args) => {
            cli::distance::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Fuzzy(args) => {
            cli::fuzzy::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
