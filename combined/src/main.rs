//! Combined binary for development - runs all services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rust-api")]
#[command(about = "Combined content services binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "3000")]
        gateway_port: u16,
        #[arg(long, default_value = "50051")]
        content_port: u16,
    },
    /// Run database migrations
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
}

#[derive(Subcommand, Clone, Copy)]
enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            gateway_port,
            content_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  Gateway:         http://{}:{}", host, gateway_port);
            info!("  Content service: http://{}:{}", host, content_port);

            // Spawn content-service first (it owns the database)
            let content_host = host.clone();
            let content_handle = tokio::spawn(async move {
                if let Err(e) = content_service_lib::run_embedded(&content_host, content_port).await
                {
                    error!("Content service failed: {}", e);
                }
            });

            // Spawn gateway; its channel connects on first request
            let gateway_host = host.clone();
            let gateway_handle = tokio::spawn(async move {
                if let Err(e) =
                    gateway_lib::run_embedded(&gateway_host, gateway_port, content_port).await
                {
                    error!("Gateway failed: {}", e);
                }
            });

            // Either service exiting is a failure of the whole process
            let exited = tokio::select! {
                _ = content_handle => "Content service",
                _ = gateway_handle => "Gateway",
            };
            error!("{} exited unexpectedly", exited);
            return Err(format!("{} exited unexpectedly", exited).into());
        }
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateAction::Up => content_service_lib::MigrateAction::Up,
                MigrateAction::Down => content_service_lib::MigrateAction::Down,
                MigrateAction::Status => content_service_lib::MigrateAction::Status,
                MigrateAction::Fresh => content_service_lib::MigrateAction::Fresh,
            };

            content_service_lib::run_migrations(migrate_action).await?;
        }
    }

    Ok(())
}
