//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use smartstay_app::ports::{HomeStateRepository, NewsletterRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API under `/api` plus a `/health` probe. Includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<HR, NR>(state: AppState<HR, NR>) -> Router
where
    HR: HomeStateRepository + Send + Sync + 'static,
    NR: NewsletterRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use smartstay_app::services::home_service::HomeService;
    use smartstay_app::services::newsletter_service::NewsletterService;
    use smartstay_domain::error::SmartStayError;
    use smartstay_domain::home::HomeState;
    use tower::ServiceExt;

    struct StubHomeRepo;
    struct StubNewsletterRepo;

    impl HomeStateRepository for StubHomeRepo {
        async fn load(&self) -> Result<HomeState, SmartStayError> {
            Ok(HomeState::default_layout())
        }
        async fn replace(&self, _state: HomeState) -> Result<(), SmartStayError> {
            Ok(())
        }
    }

    impl NewsletterRepository for StubNewsletterRepo {
        async fn add(&self, _email: String) -> Result<(), SmartStayError> {
            Ok(())
        }
        async fn list(&self) -> Result<Vec<String>, SmartStayError> {
            Ok(vec![])
        }
    }

    fn test_state() -> AppState<StubHomeRepo, StubNewsletterRepo> {
        AppState::new(
            HomeService::new(StubHomeRepo),
            NewsletterService::new(StubNewsletterRepo),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
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
    async fn should_serve_home_state_under_api_prefix() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/home-state")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(body["activeRoom"], "Living Room");
    }

    #[tokio::test]
    async fn should_reject_unknown_scene_with_structured_error() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/scenes/party/apply")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert!(body["error"].as_str().unwrap().contains("party"));
    }
}
