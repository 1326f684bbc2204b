// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Object storage reads.
//!
//! The proxy only ever reads whole objects, so the seam is a single
//! [`ObjectStore::get_object`] call. [`S3ObjectStore`] is the production
//! implementation; tests supply their own.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::configuration::ProxyOptions;
use crate::constants::INTERNAL_SERVER_ERROR_MESSAGE;

/// A fully buffered object.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// A failed read, carrying the upstream HTTP status when the store returned one.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct FetchError {
    pub status: Option<u16>,
    pub message: String,
}

impl FetchError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<SdkError<GetObjectError, HttpResponse>> for FetchError {
    fn from(source: SdkError<GetObjectError, HttpResponse>) -> Self {
        match &source {
            SdkError::ServiceError(service_err) => {
                let status = service_err.raw().status().as_u16();
                let err = service_err.err();
                // an error response without a body carries neither message nor code
                let message = err
                    .message()
                    .or_else(|| err.code())
                    .or_else(|| {
                        StatusCode::from_u16(status)
                            .ok()
                            .and_then(|s| s.canonical_reason())
                    })
                    .unwrap_or(INTERNAL_SERVER_ERROR_MESSAGE);
                FetchError::new(Some(status), message)
            }
            _ => FetchError::new(None, DisplayErrorContext(&source).to_string()),
        }
    }
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Reads the whole object at `bucket`/`key`.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, FetchError>;
}

/// [`ObjectStore`] backed by Amazon S3 (or an S3-compatible endpoint).
#[derive(Clone, Debug)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient AWS configuration (environment,
    /// profile, container or instance credentials), honoring the region and
    /// endpoint overrides in `options`.
    pub async fn from_options(options: &ProxyOptions) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        Self::from_sdk_config(&sdk_config, options.endpoint_url.as_deref())
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig, endpoint_url: Option<&str>) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);
        if let Some(endpoint) = endpoint_url {
            tracing::info!("[proxy] using custom S3 endpoint {}", endpoint);
            // S3-compatible stores generally do not support virtual-hosted buckets
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    #[tracing::instrument(skip(self))]
    async fn get_object(&self, bucket: &str, key: &str) -> Result<StoredObject, FetchError> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let content_type = response.content_type().map(str::to_string);

        let body = response
            .body
            .collect()
            .await
            .map_err(|e| FetchError::new(None, e.to_string()))?
            .into_bytes();

        tracing::debug!(
            "[proxy] read {} bytes from s3://{}/{}",
            body.len(),
            bucket,
            key
        );

        Ok(StoredObject { content_type, body })
    }
}
