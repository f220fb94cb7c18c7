/*
 * Responsibility
 * - URL 構造を定義
 * - "/" と "/authentication-required" を登録
 * - 未登録 path は axum default の 404 に任せる
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{authenticated::authentication_required, welcome::welcome};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/authentication-required", get(authentication_required))
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::api::handlers::{authenticated::AUTHENTICATED_BODY, welcome::WELCOME_BANNER};

    use super::*;

    fn app() -> Router {
        routes().with_state(AppState::new())
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn welcome_returns_banner() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, WELCOME_BANNER);
    }

    #[tokio::test]
    async fn welcome_ignores_token_headers() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("x-access-token", "abc123")
                    .header("x-refresh-token", "def456")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, WELCOME_BANNER);
    }

    #[tokio::test]
    async fn authentication_required_without_tokens() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/authentication-required")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, AUTHENTICATED_BODY);
    }

    #[tokio::test]
    async fn authentication_required_with_access_token_only() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/authentication-required")
                    .header("x-access-token", "abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, AUTHENTICATED_BODY);
    }

    #[tokio::test]
    async fn authentication_required_accepts_malformed_tokens() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/authentication-required")
                    .header("x-access-token", "")
                    .header("x-refresh-token", "not!!a@@token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, AUTHENTICATED_BODY);
    }

    #[tokio::test]
    async fn token_header_names_are_case_insensitive() {
        // Request::builder normalizes names, matching what hyper does on the wire.
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/authentication-required")
                    .header("X-Access-Token", "abc123")
                    .header("X-Refresh-Token", "def456")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, AUTHENTICATED_BODY);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
