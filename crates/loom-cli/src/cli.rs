//! Command line definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "loom")]
#[command(author, version, about = "Program graph discovery and Neo4j export", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover program graphs from snapshots and store them in Neo4j
    Build {
        /// Snapshot file, or a directory to search for *.snapshot.json
        path: PathBuf,

        /// Neo4j connection URI
        #[arg(long, default_value = "bolt://localhost:7687")]
        neo4j_uri: String,

        /// Neo4j username
        #[arg(long, default_value = "neo4j")]
        neo4j_user: String,

        /// Neo4j password
        #[arg(long)]
        neo4j_password: String,

        /// Neo4j database name
        #[arg(long)]
        database: Option<String>,

        /// Do not link reference types to themselves with type_of
        #[arg(long)]
        no_type_self_loops: bool,

        /// Export into memory instead of Neo4j and only report counts
        #[arg(long)]
        dry_run: bool,
    },

    /// Run discovery only and print what was found
    Discover {
        /// Snapshot file, or a directory to search for *.snapshot.json
        path: PathBuf,

        /// Print the whole graph as JSON
        #[arg(long)]
        json: bool,

        /// Do not link reference types to themselves with type_of
        #[arg(long)]
        no_type_self_loops: bool,
    },
}
