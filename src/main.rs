use anyhow::Result;
use captext::{
    app,
    cli::{handle_check_command, handle_fetch_command, handle_normalize_command, Cli, CliCommand},
    config::Config,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout carries transcripts for the one-shot commands
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    let serve_args = match cli.command {
        Some(CliCommand::Version) => {
            println!("captext {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(CliCommand::Fetch(args)) => {
            handle_fetch_command(args, config_path).await?;
            return Ok(());
        }
        Some(CliCommand::Normalize(args)) => {
            handle_normalize_command(args)?;
            return Ok(());
        }
        Some(CliCommand::Check) => {
            handle_check_command(config_path).await?;
            return Ok(());
        }
        Some(CliCommand::Serve(args)) => args,
        None => Default::default(),
    };

    let mut config = Config::resolve(config_path)?;
    if let Some(host) = serve_args.host {
        config.server.host = host;
    }
    if let Some(port) = serve_args.port {
        config.server.port = port;
    }

    app::run_service(config).await
}
