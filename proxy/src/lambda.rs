// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! AWS Lambda entry point.
//!
//! Each invocation carries one ALB / API Gateway proxy event and is answered
//! with one [`ProxyResponse`].

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};

use crate::models::{ProxyEvent, ProxyResponse};
use crate::proxy::ObjectProxy;

/// Handles a single invocation. A missing path is treated as the root.
#[tracing::instrument(skip(proxy, event), fields(request_id = %event.context.request_id))]
pub async fn handle_event(
    proxy: &ObjectProxy,
    event: LambdaEvent<ProxyEvent>,
) -> ProxyResponse {
    let (payload, _context) = event.into_parts();

    if tracing::enabled!(tracing::Level::DEBUG) {
        match serde_json::to_string(&payload) {
            Ok(json) => tracing::debug!("[proxy] received event: {}", json),
            Err(e) => tracing::debug!("[proxy] received unserializable event: {:?}", e),
        }
    }

    let path = payload.path.as_deref().unwrap_or_default();
    proxy.handle(path).await
}

/// Runs the Lambda runtime loop until the execution environment shuts down.
pub async fn run(proxy: Arc<ObjectProxy>) -> Result<(), Error> {
    tracing::info!("[proxy] starting lambda runtime for bucket {}", proxy.bucket());

    lambda_runtime::run(service_fn(move |event: LambdaEvent<ProxyEvent>| {
        let proxy = proxy.clone();
        async move { Ok::<ProxyResponse, Error>(handle_event(&proxy, event).await) }
    }))
    .await
}
