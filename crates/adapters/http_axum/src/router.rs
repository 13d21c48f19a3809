//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use smartroom_app::ports::StatusStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Routes the status API next to the dashboard page. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<S: StatusStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(crate::dashboard::index))
        .route("/health", get(health_check))
        .route("/status", get(crate::api::status::<S>))
        .route("/toggle-light", post(crate::api::toggle_light::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use smartroom_domain::status::DeviceStatus;
    use tower::ServiceExt;

    use super::*;

    /// Store stub that counts toggle calls and always reports defaults.
    #[derive(Default)]
    struct StubStore {
        toggles: AtomicUsize,
    }

    impl StatusStore for StubStore {
        fn snapshot(&self) -> DeviceStatus {
            DeviceStatus::default()
        }

        fn toggle_light_monitoring(&self) -> bool {
            self.toggles.fetch_add(1, Ordering::SeqCst) % 2 == 0
        }
    }

    fn test_app() -> Router {
        build(AppState::new(StubStore::default()))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_the_dashboard_page_at_root() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(
            response
                .into_body()
                .collect()
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap();
        assert!(body.contains("Smart Room"));
    }

    #[tokio::test]
    async fn should_return_status_snapshot_as_json() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body.as_object().unwrap().len(), 5);
        assert_eq!(body["roomMode"], "auto");
        assert_eq!(body["monitorLight"], false);
    }

    #[tokio::test]
    async fn should_call_toggle_exactly_once_per_post() {
        let state = AppState::new(StubStore::default());
        let store = Arc::clone(&state.store);
        let app = build(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/toggle-light")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.toggles.load(Ordering::SeqCst), 1);

        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body, serde_json::json!({"monitorLight": true}));
    }

    #[tokio::test]
    async fn should_reject_get_on_the_toggle_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/toggle-light")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn should_not_route_any_sensor_write() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    use std::sync::Arc;
}
