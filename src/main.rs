use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menu_rs::{
    handlers::create_router,
    repositories::{InMemoryMenuRepository, MenuRepository, PostgresMenuRepository},
    services::MenuService,
    Config, StoreBackend,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_environment().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    info!("Starting menu-rs service");
    info!("Menu store backend: {:?}", config.store.backend);

    let repository: Arc<dyn MenuRepository> = match config.store.backend {
        StoreBackend::Memory => Arc::new(InMemoryMenuRepository::with_default_menu()),
        StoreBackend::Database => {
            info!(
                "Postgres: host={} port={} database={}",
                config.database.host, config.database.port, config.database.name
            );
            Arc::new(PostgresMenuRepository::connect_lazy(
                config.database.connect_options(),
            ))
        }
    };

    let menu_service = Arc::new(MenuService::new(repository));
    let app = create_router(menu_service);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_rs=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
