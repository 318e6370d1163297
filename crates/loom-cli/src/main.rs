//! loom: discover program graphs and export them to Neo4j

use clap::Parser;
use loom_cli::commands::build::{self, BuildOptions};
use loom_cli::commands::discover;
use loom_cli::logging::setup_logging;
use loom_cli::{Cli, Commands};
use loom_core::{DiscoveryOptions, Neo4jConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Build {
            path,
            neo4j_uri,
            neo4j_user,
            neo4j_password,
            database,
            no_type_self_loops,
            dry_run,
        } => {
            let mut config = Neo4jConfig::new(neo4j_uri, neo4j_user, neo4j_password);
            if let Some(db) = database {
                config = config.with_database(db);
            }
            let options = BuildOptions {
                discovery: DiscoveryOptions::new().with_type_self_loops(!no_type_self_loops),
                dry_run,
            };
            build::run(&path, &config, &options).await?;
        }
        Commands::Discover {
            path,
            json,
            no_type_self_loops,
        } => {
            let options = DiscoveryOptions::new().with_type_self_loops(!no_type_self_loops);
            discover::run(&path, json, &options)?;
        }
    }

    Ok(())
}
