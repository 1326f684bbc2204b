// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use data_encoding::BASE64;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// An ALB / API Gateway proxy integration event.
///
/// Only `path` drives the proxy; the rest is kept for logging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

/// The HTTP-shaped result returned to the load balancer or API gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// Body bytes as the client should see them.
    pub fn decoded_body(&self) -> Result<Vec<u8>, AppError> {
        if self.is_base64_encoded {
            BASE64
                .decode(self.body.as_bytes())
                .map_err(|e| AppError::InvalidResponse(e.to_string()))
        } else {
            Ok(self.body.clone().into_bytes())
        }
    }

    /// Converts into an HTTP response, decoding base64 bodies the way the
    /// load balancer does.
    pub fn into_http_response(self) -> Result<Response, AppError> {
        let status = StatusCode::from_u16(self.status_code)
            .map_err(|e| AppError::InvalidResponse(e.to_string()))?;
        let body = self.decoded_body()?;

        let mut response = (status, Body::from(body)).into_response();
        for (name, value) in &self.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|e| AppError::InvalidResponse(e.to_string()))?;
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|e| AppError::InvalidResponse(e.to_string()))?;
            response.headers_mut().insert(name, value);
        }

        Ok(response)
    }
}
