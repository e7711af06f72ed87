//! Command implementations

mod add;
mod export;
mod facets;
mod filter;
mod links;
mod list;
mod locate;
mod status;
mod sync;
mod visit;

use crate::cli::{Cli, Commands};
use crate::context::AppContext;
use crate::output::OutputWriter;
use anyhow::Result;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);

    // Needs no saved state
    if let Commands::ParseLink(args) = &cli.command {
        return links::parse_link(args, &output);
    }

    let mut ctx = AppContext::load(&cli).await?;

    match cli.command {
        Commands::List(args) => list::execute(args, &mut ctx, &output).await,
        Commands::Facets(args) => facets::execute(args, &mut ctx, &output).await,
        Commands::Filter(args) => filter::execute(args, &mut ctx, &output).await,
        Commands::Visit(args) => visit::execute(args, true, &mut ctx, &output).await,
        Commands::Unvisit(args) => visit::execute(args, false, &mut ctx, &output).await,
        Commands::Status => status::execute(&mut ctx, &output).await,
        Commands::Add(args) => add::execute(args, &mut ctx, &output).await,
        Commands::Locate(args) => locate::execute(args, &mut ctx, &output).await,
        Commands::ParseLink(_) => Ok(()),
        Commands::Links(args) => links::execute(args, &ctx, &output),
        Commands::Sync(args) => sync::execute(args, &mut ctx, &output).await,
        Commands::Export(args) => export::execute(args, &mut ctx, &output).await,
    }
}
