use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "streamnation")]
#[command(author, version, about = "Movie catalog and video streaming services")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the movie-info catalog service
    Catalog {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(long)]
        db_path: Option<PathBuf>,
    },

    /// Run the video streaming service
    Stream {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory that stream paths are resolved against
        #[arg(long)]
        video_dir: Option<PathBuf>,

        /// Base URL of the catalog service for /stream/with-id lookups
        #[arg(long)]
        catalog_url: Option<String>,
    },

    /// Run both services in one process, each on its configured port
    Start {
        /// Directory that stream paths are resolved against
        #[arg(long)]
        video_dir: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses --config if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
