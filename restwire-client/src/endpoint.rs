/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Grafting the configured endpoint onto a marshalled request.
//!
//! Marshallers produce relative URIs (path + query only); the endpoint
//! contributes scheme, authority and an optional base path.

use http::Uri;
use restwire_http::HttpRequest;
use std::borrow::Cow;
use std::error::Error;

type BoxError = Box<dyn Error + Send + Sync>;

/// Rewrites `request`'s URI so that it targets `endpoint`.
pub(crate) fn apply_endpoint(request: &mut HttpRequest, endpoint: &Uri) -> Result<(), BoxError> {
    let authority = endpoint
        .authority()
        .map(|auth| auth.as_str())
        .unwrap_or("");
    let scheme = endpoint
        .scheme()
        .ok_or("endpoint must have a scheme")?
        .clone();
    let new_uri = Uri::builder()
        .authority(authority)
        .scheme(scheme)
        .path_and_query(merge_paths(endpoint, request.uri()).as_ref())
        .build()
        .map_err(|_| "failed to construct url")?;
    *request.uri_mut() = new_uri;
    Ok(())
}

fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
    if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
        tracing::warn!(query = %query, "query specified in endpoint will be ignored");
    }
    let endpoint_path = endpoint.path();
    let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
    if endpoint_path.is_empty() || endpoint_path == "/" {
        Cow::Borrowed(uri_path_and_query)
    } else {
        let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
        let uri_path_no_slash = uri_path_and_query
            .strip_prefix('/')
            .unwrap_or(uri_path_and_query);
        Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
    }
}
