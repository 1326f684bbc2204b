// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP route handlers for local development.
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | `/health` | [`health`] | Health check endpoint |
//! | GET | `/*` | [`get_object`] | Serve an object from the bucket |
//!
//! `/health` takes precedence over the catch-all, so an object keyed `health`
//! cannot be fetched through the local server. The Lambda handler has no
//! health route and serves that key like any other.
//!
//! Responses are produced by the same [`ObjectProxy`](crate::proxy::ObjectProxy)
//! the Lambda handler uses, so the local server behaves like the deployed one.

use std::sync::Arc;

use crate::application::AppState;
use crate::errors::AppError;

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Health check endpoint.
///
/// # Response
///
/// ```json
/// {"status": "ok"}
/// ```
pub async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Serves the object named by the request path.
///
/// The raw (still percent-encoded) path is used, matching what the load
/// balancer puts in the Lambda event.
#[tracing::instrument(skip(state))]
pub async fn get_object(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Response, AppError> {
    let response = state.proxy.handle(uri.path()).await;
    response.into_http_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::configuration::BodyEncoding;
    use crate::proxy::ObjectProxy;
    use crate::storage::{FetchError, ObjectStore, StoredObject};
    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use bytes::Bytes;

    // Router-level tests are in tests/http_integration.rs

    /// Serves every key with the given content type.
    struct TypedStore(&'static str);

    #[async_trait]
    impl ObjectStore for TypedStore {
        async fn get_object(&self, _bucket: &str, key: &str) -> Result<StoredObject, FetchError> {
            Ok(StoredObject {
                content_type: Some(self.0.to_string()),
                body: Bytes::from(key.to_string()),
            })
        }
    }

    fn state(content_type: &'static str) -> State<Arc<AppState>> {
        let proxy = ObjectProxy::new(
            Arc::new(TypedStore(content_type)),
            "site",
            "index.html",
            BodyEncoding::Text,
        );
        State(Arc::new(AppState {
            proxy: Arc::new(proxy),
        }))
    }

    #[tokio::test]
    async fn test_get_object_uses_raw_path() {
        let uri: Uri = "/docs/a%20b.txt?download=1".parse().unwrap();
        let response = get_object(state("text/plain"), uri).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"docs/a%20b.txt");
    }

    #[tokio::test]
    async fn test_get_object_rejects_unrepresentable_content_type() {
        let uri: Uri = "/index.html".parse().unwrap();
        let result = get_object(state("text/html\r\nx-injected: 1"), uri).await;
        assert!(matches!(result, Err(AppError::InvalidResponse(_))));
    }
}
