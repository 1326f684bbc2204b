// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// Object served when a request path names the root or a directory.
pub const DEFAULT_DOCUMENT: &str = "index.html";
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Set by the Lambda execution environment; its presence selects Lambda mode.
pub const LAMBDA_RUNTIME_API_ENV: &str = "AWS_LAMBDA_RUNTIME_API";

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const ERROR_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";
