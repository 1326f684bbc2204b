// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::constants::INTERNAL_SERVER_ERROR_MESSAGE;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum AppError {
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid proxy response: {0}")]
    InvalidResponse(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("[proxy] {}", self);

        let (status, message) = match self {
            Self::InternalServerError | Self::InvalidResponse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            ),
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({"code": status.as_u16(), "message": message}));

        (status, body).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        tracing::error!("{:?}", source);
        AppError::InternalServerError
    }
}
