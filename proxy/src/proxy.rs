// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Request path to object read to HTTP-shaped response.
//!
//! [`ObjectProxy::handle`] is the whole request flow:
//!
//! 1. Derive the object key from the path (see [`crate::object_key`])
//! 2. Read the object from the configured bucket
//! 3. Return it with its original content type, or surface the upstream
//!    status and message on failure
//!
//! A failed read fails the whole request. There is no retry here beyond what
//! the storage client does on its own.

use std::collections::BTreeMap;
use std::sync::Arc;

use data_encoding::BASE64;

use crate::configuration::{BodyEncoding, ProxyOptions};
use crate::constants::{CONTENT_TYPE_HEADER, ERROR_CONTENT_TYPE, INTERNAL_SERVER_ERROR_MESSAGE};
use crate::models::ProxyResponse;
use crate::object_key::object_key_for_path;
use crate::storage::{FetchError, ObjectStore, StoredObject};

pub struct ObjectProxy {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    default_document: String,
    body_encoding: BodyEncoding,
}

impl ObjectProxy {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
        default_document: impl Into<String>,
        body_encoding: BodyEncoding,
    ) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            default_document: default_document.into(),
            body_encoding,
        }
    }

    pub fn from_options(store: Arc<dyn ObjectStore>, options: &ProxyOptions) -> Self {
        Self::new(
            store,
            options.bucket.clone(),
            options.default_document.clone(),
            options.body_encoding,
        )
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, path: &str) -> ProxyResponse {
        let key = object_key_for_path(path, &self.default_document);
        tracing::info!("[proxy] object key: {}", key);

        match self.store.get_object(&self.bucket, &key).await {
            Ok(object) => self.success(object),
            Err(e) => {
                tracing::error!(
                    "[proxy] failed to read s3://{}/{}: {:?}",
                    self.bucket,
                    key,
                    e
                );
                failure(e)
            }
        }
    }

    fn success(&self, object: StoredObject) -> ProxyResponse {
        let mut headers = BTreeMap::new();
        if let Some(content_type) = object.content_type {
            headers.insert(CONTENT_TYPE_HEADER.to_string(), content_type);
        }

        let (body, is_base64_encoded) = match self.body_encoding {
            BodyEncoding::Text => (String::from_utf8_lossy(&object.body).into_owned(), false),
            BodyEncoding::Base64 => (BASE64.encode(&object.body), true),
        };

        ProxyResponse {
            status_code: 200,
            headers,
            body,
            is_base64_encoded,
        }
    }
}

fn failure(error: FetchError) -> ProxyResponse {
    let body = if error.message.is_empty() {
        INTERNAL_SERVER_ERROR_MESSAGE.to_string()
    } else {
        error.message
    };

    ProxyResponse {
        status_code: error.status.unwrap_or(500),
        headers: BTreeMap::from([(
            CONTENT_TYPE_HEADER.to_string(),
            ERROR_CONTENT_TYPE.to_string(),
        )]),
        body,
        is_base64_encoded: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;

    /// Returns a fixed result and records the keys it was asked for.
    struct FixedStore {
        result: Result<StoredObject, FetchError>,
        requested: Mutex<Vec<(String, String)>>,
    }

    impl FixedStore {
        fn new(result: Result<StoredObject, FetchError>) -> Arc<Self> {
            Arc::new(Self {
                result,
                requested: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ObjectStore for FixedStore {
        async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, FetchError> {
            self.requested
                .lock()
                .unwrap()
                .push((bucket.to_string(), key.to_string()));
            self.result.clone()
        }
    }

    fn object(content_type: Option<&str>, body: &'static [u8]) -> StoredObject {
        StoredObject {
            content_type: content_type.map(str::to_string),
            body: Bytes::from_static(body),
        }
    }

    fn proxy(store: Arc<FixedStore>, encoding: BodyEncoding) -> ObjectProxy {
        ObjectProxy::new(store, "site-bucket", "index.html", encoding)
    }

    #[tokio::test]
    async fn test_success_copies_content_type() {
        let store = FixedStore::new(Ok(object(Some("application/json"), b"{\"a\":1}")));
        let response = proxy(store.clone(), BodyEncoding::Text)
            .handle("/foo/bar.json")
            .await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers.len(), 1);
        assert_eq!(response.headers["Content-Type"], "application/json");
        assert_eq!(response.body, "{\"a\":1}");
        assert!(!response.is_base64_encoded);

        let requested = store.requested.lock().unwrap();
        assert_eq!(
            requested.as_slice(),
            &[("site-bucket".to_string(), "foo/bar.json".to_string())]
        );
    }

    #[tokio::test]
    async fn test_root_requests_default_document() {
        let store = FixedStore::new(Ok(object(Some("text/html"), b"<html></html>")));
        proxy(store.clone(), BodyEncoding::Text).handle("/").await;

        let requested = store.requested.lock().unwrap();
        assert_eq!(requested[0].1, "index.html");
    }

    #[tokio::test]
    async fn test_missing_content_type_omits_header() {
        let store = FixedStore::new(Ok(object(None, b"data")));
        let response = proxy(store, BodyEncoding::Text).handle("/blob").await;

        assert_eq!(response.status_code, 200);
        assert!(response.headers.is_empty());
    }

    #[tokio::test]
    async fn test_text_mode_replaces_invalid_utf8() {
        let store = FixedStore::new(Ok(object(Some("text/plain"), b"ok\xffok")));
        let response = proxy(store, BodyEncoding::Text).handle("/file.txt").await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "ok\u{fffd}ok");
    }

    #[tokio::test]
    async fn test_base64_mode_encodes_body() {
        let store = FixedStore::new(Ok(object(Some("image/png"), b"\x89PNG\r\n")));
        let response = proxy(store, BodyEncoding::Base64).handle("/logo.png").await;

        assert_eq!(response.status_code, 200);
        assert!(response.is_base64_encoded);
        assert_eq!(response.headers["Content-Type"], "image/png");
        assert_eq!(response.decoded_body().unwrap(), b"\x89PNG\r\n".to_vec());
    }

    #[tokio::test]
    async fn test_not_found_keeps_status_and_message() {
        let store = FixedStore::new(Err(FetchError::new(
            Some(404),
            "The specified key does not exist.",
        )));
        let response = proxy(store, BodyEncoding::Text).handle("/missing.html").await;

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, "The specified key does not exist.");
        assert!(!response.is_base64_encoded);
    }

    #[tokio::test]
    async fn test_failure_without_status_is_500() {
        let store = FixedStore::new(Err(FetchError::new(None, "dispatch failure")));
        let response = proxy(store, BodyEncoding::Base64).handle("/a").await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "dispatch failure");
        assert!(!response.is_base64_encoded);
    }

    #[tokio::test]
    async fn test_failure_without_message_uses_default() {
        let store = FixedStore::new(Err(FetchError::new(None, "")));
        let response = proxy(store, BodyEncoding::Text).handle("/a").await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "Internal Server Error");
    }
}
