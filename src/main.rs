mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use sn_core::config::Config;
use sn_server::Services;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "streamnation=trace,sn_server=trace,sn_db=debug,sn_core=debug,tower_http=debug"
                .to_string()
        } else {
            "streamnation=info,sn_server=info,sn_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Catalog {
            host,
            port,
            db_path,
        } => {
            let mut config = Config::load_or_default(cli.config.as_deref());
            if let Some(host) = host {
                config.catalog.host = host;
            }
            if let Some(port) = port {
                config.catalog.port = port;
            }
            if let Some(db_path) = db_path {
                config.catalog.db_path = db_path;
            }
            run(config, Services::Catalog)
        }
        Commands::Stream {
            host,
            port,
            video_dir,
            catalog_url,
        } => {
            let mut config = Config::load_or_default(cli.config.as_deref());
            if let Some(host) = host {
                config.streaming.host = host;
            }
            if let Some(port) = port {
                config.streaming.port = port;
            }
            if let Some(video_dir) = video_dir {
                config.streaming.video_dir = video_dir;
            }
            if let Some(url) = catalog_url {
                config.streaming.catalog_url = Some(url);
            }
            run(config, Services::Streaming)
        }
        Commands::Start { video_dir } => {
            let mut config = Config::load_or_default(cli.config.as_deref());
            if let Some(video_dir) = video_dir {
                config.streaming.video_dir = video_dir;
            }
            run(config, Services::Both)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("streamnation {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run(config: Config, services: Services) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(sn_server::start(config, services))?;
    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        bail!("no config file given; pass a path or --config");
    };

    let config = Config::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("Configuration is valid");
    } else {
        for warning in &warnings {
            println!("warning: {warning}");
        }
    }
    Ok(())
}
