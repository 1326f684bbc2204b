// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Request path to object key translation.

/// Derives the object key for a request path.
///
/// One leading `/` is stripped. An empty remainder, or one ending in `/`,
/// names a directory and resolves to `default_document`. Anything else is
/// used as-is, without decoding or normalization.
pub fn object_key_for_path(path: &str, default_document: &str) -> String {
    let key = path.strip_prefix('/').unwrap_or(path);

    if key.is_empty() || key.ends_with('/') {
        return default_document.to_string();
    }

    key.to_string()
}
