use school_portal::config::database::{Database, DatabaseTrait};
use school_portal::config::{logging, parameter};
use school_portal::repository::role_repository::RoleRepository;
use school_portal::repository::user_repository::UserRepository;
use school_portal::routes;
use school_portal::service::bootstrap_service::BootstrapService;
use school_portal::service::password_service::PasswordService;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    parameter::init();
    logging::init();

    info!("Starting school portal API...");

    let connection = match Database::init().await {
        Ok(conn) => {
            info!("Database connection established");
            conn
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    };
    let connection = Arc::new(connection);

    // seed the role catalog and, when configured, the admin account
    let bootstrap = BootstrapService::new(
        Arc::new(UserRepository::new(&connection)),
        Arc::new(RoleRepository::new(&connection)),
        PasswordService::from_env(),
    );
    if let Err(e) = bootstrap.run_from_env().await {
        error!("Bootstrap failed: {}", e);
        return Err(format!("bootstrap failed: {e}").into());
    }
    info!("Bootstrap completed");

    let app = match routes::root::routes(connection) {
        Ok(router) => router,
        Err(e) => {
            error!("Failed to initialize routes: {}", e);
            return Err(Box::new(e) as Box<dyn std::error::Error>);
        }
    };

    let host = format!(
        "{}:{}",
        parameter::get("SERVER_ADDRESS"),
        parameter::get("SERVER_PORT")
    );
    let listener = tokio::net::TcpListener::bind(&host).await?;
    info!("Server listening on {}", host);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(err) => error!("Unable to listen for shutdown signal: {}", err),
    }
}
