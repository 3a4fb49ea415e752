//! HTTP transport.
//!
//! Every request goes to a single fallback handler that forwards it to
//! [`handler::handle`](../handler/fn.handle.html), so routing and error
//! responses are decided there.
use std::io;
use axum::Router;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json};
use super::conf::Conf;
use super::handler;

async fn forward(method: Method, uri: Uri, body: Bytes) -> impl IntoResponse {
    let response = handler::handle(method.as_str(), uri.path(), &body);
    let status = StatusCode::from_u16(response.status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body))
}

pub fn router() -> Router {
    Router::new().fallback(forward)
}

pub async fn serve(conf: &Conf) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(conf.addr()).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router()).await
}

#[cfg(test)]
mod tests {
    use axum::body::{self, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;
    use super::*;

    async fn send(method: &str, path: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::from(body.to_owned()))
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_forward() {
        let (status, body) = send("POST", "/convert/full",
                                  r#"{"wavelength": 1.8}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wavelength_angstrom"], 1.8);
        assert!(body["velocity_ms"].as_f64().unwrap() > 2197.0);

        let (status, body) = send("GET", "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn test_forward_errors() {
        let (status, body) = send("POST", "/convert/nothing", "{}").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Endpoint not found" }));

        let (status, body) = send("GET", "/convert/full", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "error": "Method not allowed" }));

        let (status, _) = send("POST", "/convert/full", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
