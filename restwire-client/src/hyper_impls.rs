/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! A [`Connector`] backed by hyper with TLS.

use crate::connector::{BoxFuture, Connector, ConnectorError};
use hyper::client::HttpConnector;
use hyper_tls::HttpsConnector;
use restwire_http::{HttpRequest, HttpResponse};

/// Connects over HTTPS using a shared hyper client.
///
/// All clones share one connection pool. Responses are buffered in full
/// before being handed to the caller.
#[derive(Debug, Clone)]
pub struct HyperConnector {
    client: hyper::Client<HttpsConnector<HttpConnector>, hyper::Body>,
}

impl HyperConnector {
    /// Constructs a connector with native-TLS roots.
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        let client = hyper::Client::builder().build::<_, hyper::Body>(https);
        HyperConnector { client }
    }
}

impl Default for HyperConnector {
    fn default() -> Self {
        Self::https()
    }
}

impl Connector for HyperConnector {
    fn send(&self, request: HttpRequest) -> BoxFuture<Result<HttpResponse, ConnectorError>> {
        let client = self.client.clone();
        Box::pin(async move {
            let request = request.map(hyper::Body::from);
            let response = client.request(request).await.map_err(classify)?;
            let (parts, body) = response.into_parts();
            let body = hyper::body::to_bytes(body)
                .await
                .map_err(ConnectorError::io)?;
            Ok(http::Response::from_parts(parts, body))
        })
    }
}

fn classify(err: hyper::Error) -> ConnectorError {
    if err.is_timeout() {
        ConnectorError::timeout(err)
    } else if err.is_connect() || err.is_incomplete_message() || err.is_canceled() {
        ConnectorError::io(err)
    } else {
        ConnectorError::other(err)
    }
}
