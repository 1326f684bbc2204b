// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use s3_proxy::application::Application;
use s3_proxy::configuration::ProxyOptions;
use s3_proxy::proxy::ObjectProxy;
use s3_proxy::storage::S3ObjectStore;
use s3_proxy::{constants, lambda};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| constants::DEFAULT_LOG_FILTER.into()),
        ))
        // this needs to be set to remove duplicated information in the log.
        .with_current_span(false)
        // this needs to be set to false, otherwise ANSI color codes will
        // show up in a confusing manner in CloudWatch logs.
        .with_ansi(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        // remove the name of the function from every log entry
        .with_target(false)
        .init();

    // get configuration options from environment variables
    let options = ProxyOptions::parse();
    options.validate().context("invalid configuration")?;

    tracing::info!("[proxy] {:?}", &options);

    let store = Arc::new(S3ObjectStore::from_options(&options).await);
    let proxy = Arc::new(ObjectProxy::from_options(store, &options));

    if std::env::var_os(constants::LAMBDA_RUNTIME_API_ENV).is_some() {
        return lambda::run(proxy)
            .await
            .map_err(|e| anyhow::anyhow!(e))
            .context("lambda runtime failed");
    }

    tracing::warn!("[proxy] not running inside lambda, starting local HTTP server");

    let application = Application::build(options, proxy)
        .await
        .context("unable to start HTTP server")?;

    application
        .run_until_stopped()
        .await
        .context("HTTP server failed")
}
