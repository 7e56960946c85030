use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod core;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("bookshelf=debug,info")
    } else {
        EnvFilter::new("bookshelf=warn")
    };

    // Logs go to stderr so menu and command output stay on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let mut store = catalog::store::CatalogStore::open(&cli.library)
        .with_context(|| format!("Failed to open library {}", cli.library.display()))?;

    match cli.command.unwrap_or(cli::Commands::Menu) {
        cli::Commands::Menu => {
            cli::menu::run(&mut store)?;
        }
        cli::Commands::Add(args) => {
            cli::add::run(&args, &mut store, cli.format)?;
        }
        cli::Commands::Remove(args) => {
            cli::remove::run(&args, &mut store, cli.format)?;
        }
        cli::Commands::Search(args) => {
            cli::search::run(&args, &store, cli.format)?;
        }
        cli::Commands::List => {
            cli::list::run(&store, cli.format)?;
        }
        cli::Commands::MarkRead(args) => {
            cli::list::run_mark_read(&args, &mut store, cli.format)?;
        }
        cli::Commands::Stats => {
            cli::stats::run(&store, cli.format)?;
        }
        cli::Commands::Export(args) => {
            cli::export::run(&args, &store)?;
        }
    }

    Ok(())
}
