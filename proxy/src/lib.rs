// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # S3 Proxy
//!
//! Serves objects from a private S3 bucket behind a load balancer.
//!
//! Each request path is mapped to an object key, the object is read in full,
//! and it is returned with its original `Content-Type`. Directory and root
//! paths resolve to a default document (`index.html`).
//!
//! ## Architecture
//!
//! ```text
//! ALB / API Gateway -> Lambda (this crate) -> S3 GetObject
//!
//! local:  HTTP client -> axum (this crate) -> S3 GetObject
//! ```
//!
//! ## Modules
//!
//! - [`application`]: Local HTTP server setup with Axum
//! - [`configuration`]: CLI argument and environment parsing with clap
//! - [`constants`]: Defaults and fixed header values
//! - [`errors`]: Application error types with HTTP response mapping
//! - [`lambda`]: Lambda runtime entry point
//! - [`models`]: Lambda proxy event and response types
//! - [`object_key`]: Request path to object key translation
//! - [`proxy`]: The request flow shared by Lambda and the local server
//! - [`routes`]: HTTP route handlers (health, objects)
//! - [`storage`]: Object reads from S3
//!
//! ## Usage
//!
//! ```bash
//! BUCKET_NAME=my-site-bucket s3-proxy --port 8080
//! ```
//!
//! Inside Lambda (`AWS_LAMBDA_RUNTIME_API` set) the same binary serves
//! invocations instead of listening on a port.

pub mod application;
pub mod configuration;
pub mod constants;
pub mod errors;
pub mod lambda;
pub mod models;
pub mod object_key;
pub mod proxy;
pub mod routes;
pub mod storage;
