//! Tessera CLI binary.
//!
//! - Serve the site, admin API, and function endpoints
//! - Inspect admin list screens and the dashboard
//! - Send simulated confirmation emails and check SMTP settings

use clap::Parser;
use tessera::cli::{
    Cli, Commands, handle_admin_command, handle_notify_command, handle_smtp_command, run_server,
};
use tessera::logging::LogOptions;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let log = LogOptions {
        verbose: cli.verbose,
        json: cli.json_logs,
    };

    #[cfg(feature = "observability")]
    tessera::observability::init_observability(
        tessera::observability::ObservabilityConfig::default().with_log(log),
    )?;
    #[cfg(not(feature = "observability"))]
    tessera::logging::init_logging(log)?;

    match cli.command {
        Commands::Serve { bind } => run_server(bind).await?,
        Commands::Admin(cmd) => handle_admin_command(cmd)?,
        Commands::Notify(cmd) => handle_notify_command(cmd).await?,
        Commands::Smtp(cmd) => handle_smtp_command(cmd).await?,
    }

    Ok(())
}
