// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use crate::configuration::ProxyOptions;
use crate::errors::AppError;
use crate::proxy::ObjectProxy;
use crate::routes;
use axum::Router;
use axum::routing::get;
use axum::serve::Serve;
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ObjectProxy>,
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(options: ProxyOptions, proxy: Arc<ObjectProxy>) -> Result<Self, AppError> {
        let address = format!("{}:{}", options.host, options.port);
        let listener = TcpListener::bind(address).await?;
        let server = run(listener, proxy)?;
        let port = server.local_addr()?.port();

        tracing::info!("[proxy] listening at http://{}:{}", options.host, port);

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        Ok(self.server.await?)
    }
}

/// Builds the router: `/health` plus every other GET path proxied to the bucket.
pub fn create_router(proxy: Arc<ObjectProxy>) -> Router {
    let state = Arc::new(AppState { proxy });

    Router::new()
        .route("/health", get(routes::health))
        .route("/", get(routes::get_object))
        .route("/{*path}", get(routes::get_object))
        .with_state(state)
}

#[tracing::instrument(skip(listener, proxy), fields(bucket = proxy.bucket()))]
pub fn run(
    listener: TcpListener,
    proxy: Arc<ObjectProxy>,
) -> Result<Serve<TcpListener, Router, Router>, AppError> {
    let app = create_router(proxy);
    Ok(axum::serve(listener, app))
}
