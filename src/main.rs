//! folio - content engine for a portfolio site.

use anyhow::Result;
use clap::Parser;
use folio::{
    cli::{Cli, Commands},
    commands,
    config::{SiteConfig, cfg, init_config},
    serve::serve_site,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_config(SiteConfig::load(&cli)?);
    let config = cfg();

    match &cli.command {
        Commands::Serve { .. } => serve_site(),
        Commands::Work => commands::work(&config),
        Commands::List { category, sub } => commands::list(&config, category, sub.as_deref()),
        Commands::Show { sub, slug } => commands::show(&config, sub, slug),
        Commands::Routes => {
            commands::print_routes();
            Ok(())
        }
        Commands::Hash { password } => {
            commands::hash(password);
            Ok(())
        }
        Commands::Check => commands::check(&config),
    }
}
