//! Integration tests for the health check and CORS

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use serial_test::serial;
    use tower::util::ServiceExt;

    use crate::test_utils::{TEST_FRONTEND_URL, body_to_json, get, test_app};

    #[tokio::test]
    #[serial]
    async fn it_reports_health() {
        let provider = mockito::Server::new_async().await;
        let app = test_app(&provider.url()).await;

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_to_json(response.into_body()).await;
        assert_eq!(body, json!({"status": "OK"}));
    }

    #[tokio::test]
    #[serial]
    async fn it_allows_the_frontend_origin() {
        let provider = mockito::Server::new_async().await;
        let app = test_app(&provider.url()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/chat")
                    .method("OPTIONS")
                    .header(header::ORIGIN, TEST_FRONTEND_URL)
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            TEST_FRONTEND_URL
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    #[tokio::test]
    #[serial]
    async fn it_ignores_other_origins() {
        let provider = mockito::Server::new_async().await;
        let app = test_app(&provider.url()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The configured origin is always echoed, browsers reject the
        // response because it doesn't match theirs
        assert_eq!(response.status(), StatusCode::OK);
        let allowed = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
        assert_ne!(
            allowed.and_then(|v| v.to_str().ok()),
            Some("http://evil.example")
        );
    }
}
