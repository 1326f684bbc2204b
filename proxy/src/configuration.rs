// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use clap::{Parser, ValueEnum};

use crate::constants::{DEFAULT_DOCUMENT, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
use crate::errors::AppError;

/// How object bytes are placed into the response body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BodyEncoding {
    /// UTF-8 text, invalid sequences replaced.
    #[default]
    Text,
    /// Standard base64, flagged with `isBase64Encoded`.
    Base64,
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct ProxyOptions {
    #[arg(long, env("BUCKET_NAME"))]
    pub bucket: String,
    #[arg(long, value_enum, default_value_t = BodyEncoding::Text, env("PROXY_BODY_ENCODING"))]
    pub body_encoding: BodyEncoding,
    #[arg(long, default_value = DEFAULT_DOCUMENT, env("PROXY_DEFAULT_DOCUMENT"))]
    pub default_document: String,
    #[arg(long, env("PROXY_REGION"))]
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible stores (enables path-style addressing)
    #[arg(long, env("PROXY_ENDPOINT_URL"))]
    pub endpoint_url: Option<String>,
    #[arg(long, default_value = DEFAULT_HTTP_HOST, env("PROXY_HTTP_HOST"))]
    pub host: String,
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT, env("PROXY_HTTP_PORT"))]
    pub port: u16,
}

impl Default for ProxyOptions {
    fn default() -> Self {
        ProxyOptions {
            bucket: String::new(),
            body_encoding: BodyEncoding::Text,
            default_document: DEFAULT_DOCUMENT.to_string(),
            region: None,
            endpoint_url: None,
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl ProxyOptions {
    /// Rejects settings that would make every request fail.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.bucket.trim().is_empty() {
            return Err(AppError::ConfigError("bucket name must not be empty".into()));
        }
        if self.default_document.is_empty() || self.default_document.ends_with('/') {
            return Err(AppError::ConfigError(format!(
                "invalid default document: {:?}",
                self.default_document
            )));
        }
        Ok(())
    }
}
