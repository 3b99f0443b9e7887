use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use dealership::config::{database::run_migrations, init_tracing, Config};
use dealership::middleware::{ErrorHandler, RequestId};
use dealership::modules::health;
use dealership::AppServices;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app);
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting dealership service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    run_migrations(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    let services = AppServices::mysql(db_pool.clone());
    let permissive_cors = !config.app.is_production();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let cors = if permissive_cors {
            Cors::permissive()
        } else {
            Cors::default()
        };

        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(web::Data::new(db_pool.clone()))
            .configure(health::configure)
            .configure(|cfg| services.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
