use std::sync::Arc;

use reqwest::Client;
use sqlx::postgres::PgConnectOptions;
use tokio::net::TcpListener;

use menu_rs::handlers::create_router;
use menu_rs::repositories::{InMemoryMenuRepository, MenuRepository, PostgresMenuRepository};
use menu_rs::services::MenuService;

pub struct TestEnvironment {
    pub client: Client,
    pub base_url: String,
}

/// Spawn the real router on an ephemeral port, backed by the given store.
pub async fn spawn_app(repository: Arc<dyn MenuRepository>) -> TestEnvironment {
    let menu_service = Arc::new(MenuService::new(repository));
    let app = create_router(menu_service);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("test listener address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    TestEnvironment {
        client: Client::new(),
        base_url: format!("http://{}", addr),
    }
}

/// Spawn the app with the default in-memory menu.
pub async fn spawn_default_app() -> TestEnvironment {
    spawn_app(Arc::new(InMemoryMenuRepository::with_default_menu())).await
}

/// A database-backed store pointed at a host that refuses connections, so
/// the first query fails with a connection error.
pub fn unreachable_database_repository() -> PostgresMenuRepository {
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("menu")
        .database("menu");
    PostgresMenuRepository::connect_lazy(options)
}
