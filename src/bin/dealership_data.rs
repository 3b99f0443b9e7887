use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use dealership::config::{database::run_migrations, init_tracing, AppConfig, DatabaseConfig};
use dealership::transfer::{DataTransferService, MySqlSnapshotStore};

#[derive(Parser)]
#[command(name = "dealership-data")]
#[command(about = "Export or import every dealership record as JSON.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump employees, cars and sales to a file
    #[command(alias = "e")]
    Export {
        #[arg(long, default_value = "export.json")]
        path: PathBuf,
    },
    /// Restore records from a dump, inserting or updating by primary key
    #[command(alias = "i")]
    Import {
        #[arg(long, default_value = "export.json")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let app = AppConfig::from_env();
    init_tracing(&app);

    let database = DatabaseConfig::from_env().context("Failed to load database configuration")?;
    database.validate()?;
    let pool = database
        .create_pool()
        .await
        .context("Failed to create database pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let service = DataTransferService::new(Arc::new(MySqlSnapshotStore::new(pool)));

    match cli.command {
        Commands::Export { path } => {
            let summary = service
                .export_to(&path)
                .await
                .with_context(|| format!("Export to {} failed", path.display()))?;
            println!(
                "Exported {} employees, {} cars and {} sales to {}",
                summary.employees,
                summary.cars,
                summary.sales,
                path.display()
            );
        }
        Commands::Import { path } => {
            let summary = service
                .import_from(&path)
                .await
                .with_context(|| format!("Import from {} failed", path.display()))?;
            println!(
                "Imported {} employees, {} cars and {} sales from {}",
                summary.employees,
                summary.cars,
                summary.sales,
                path.display()
            );
        }
    }

    Ok(())
}
