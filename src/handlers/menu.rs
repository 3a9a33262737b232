use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument};

use crate::handlers::health_check;
use crate::models::MenuItem;
use crate::services::MenuService;

/// Shared application state for menu endpoints
#[derive(Clone)]
pub struct ApiState {
    pub menu_service: Arc<MenuService>,
}

/// Create the application router with all endpoints and middleware
pub fn create_router(menu_service: Arc<MenuService>) -> Router {
    let state = ApiState { menu_service };

    Router::new()
        .route("/api/menu", get(get_menu))
        .with_state(state)
        .route("/health/status", get(health_check))
        // Cross-origin reads are open to any frontend origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// List the full breakfast menu.
///
/// Takes no parameters; unexpected query strings or bodies are ignored. A
/// store failure is logged here and mapped to an opaque 500 body.
#[instrument(name = "get_menu", skip(state))]
pub async fn get_menu(
    State(state): State<ApiState>,
) -> Result<Json<Vec<MenuItem>>, (StatusCode, Json<Value>)> {
    match state.menu_service.list_menu().await {
        Ok(items) => {
            info!("Successfully listed {} menu items", items.len());
            Ok(Json(items))
        }
        Err(err) => {
            error!("Failed to list menu: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database error" })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tokio_test::assert_ok;
    use tower::ServiceExt;

    use crate::models::{StoreError, StoreResult};
    use crate::repositories::{InMemoryMenuRepository, MenuRepository};

    struct FailingMenuRepository;

    #[async_trait]
    impl MenuRepository for FailingMenuRepository {
        async fn list_items(&self) -> StoreResult<Vec<MenuItem>> {
            Err(StoreError::DataUnavailable {
                message: "connection refused".to_string(),
            })
        }
    }

    fn default_app() -> Router {
        let repository = Arc::new(InMemoryMenuRepository::with_default_menu());
        create_router(Arc::new(MenuService::new(repository)))
    }

    #[tokio::test]
    async fn test_get_menu_returns_menu_json() {
        let app = default_app();

        let request = Request::builder()
            .uri("/api/menu")
            .body(Body::empty())
            .unwrap();

        let response = tokio_test::assert_ok!(app.oneshot(request).await);

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let items: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            items,
            json!([
                {"id": 1, "name": "Oats Porridge", "price": 45},
                {"id": 2, "name": "Vegetable Upma", "price": 50},
                {"id": 3, "name": "Sprouts Salad", "price": 60},
            ])
        );
    }

    #[tokio::test]
    async fn test_get_menu_ignores_query_string() {
        let app = default_app();

        let request = Request::builder()
            .uri("/api/menu?page=2&sort=price")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_opaque_500() {
        let repository = Arc::new(FailingMenuRepository);
        let app = create_router(Arc::new(MenuService::new(repository)));

        let request = Request::builder()
            .uri("/api/menu")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(error, json!({"error": "Database error"}));
    }
}
