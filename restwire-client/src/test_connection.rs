/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */
//! Connectors useful for testing clients without a network.

use crate::connector::{BoxFuture, Connector, ConnectorError};
use bytes::Bytes;
use http::header::HeaderName;
use restwire_http::{HttpRequest, HttpResponse};
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

type ConnectVec = Vec<(HttpRequest, HttpResponse)>;

/// A recorded exchange: the request a test expected next to a connection and
/// the request the client actually produced.
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: HttpRequest,
    pub actual: HttpRequest,
}

impl ValidateRequest {
    /// Panics unless the actual request carries the expected method, URI,
    /// headers (minus `ignore_headers`) and body.
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        assert_eq!(actual.method(), expected.method());
        assert_eq!(actual.uri(), expected.uri());
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(
                    actual_header.to_str().unwrap(),
                    value.to_str().unwrap(),
                    "Header mismatch for {:?}",
                    name
                );
            }
        }
        match (
            std::str::from_utf8(actual.body()),
            std::str::from_utf8(expected.body()),
        ) {
            (Ok(actual_body), Ok(expected_body)) => {
                assert_body_matches(actual_body, expected_body)
            }
            _ => assert_eq!(actual.body(), expected.body()),
        }
    }
}

// JSON bodies compare structurally so key order and whitespace don't matter.
fn assert_body_matches(actual: &str, expected: &str) {
    match (
        serde_json::from_str::<serde_json::Value>(actual),
        serde_json::from_str::<serde_json::Value>(expected),
    ) {
        (Ok(actual_json), Ok(expected_json)) => assert_eq!(actual_json, expected_json),
        _ => assert_eq!(actual, expected),
    }
}

/// A connector preloaded with a series of request/response pairs.
///
/// Each dispatched request consumes the next pair's response and is recorded
/// for later examination with [`requests`](TestConnection::requests) or
/// [`assert_requests_match`](TestConnection::assert_requests_match).
#[derive(Debug)]
pub struct TestConnection {
    data: Arc<Mutex<ConnectVec>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl Clone for TestConnection {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl TestConnection {
    pub fn new(mut data: ConnectVec) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        self.requests.lock().unwrap()
    }

    /// Panics unless every preloaded pair was consumed and every actual
    /// request matched its expected counterpart.
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = self.data.lock().unwrap().len();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

impl Connector for TestConnection {
    fn send(&self, actual: HttpRequest) -> BoxFuture<Result<HttpResponse, ConnectorError>> {
        let result = if let Some((expected, response)) = self.data.lock().unwrap().pop() {
            self.requests
                .lock()
                .unwrap()
                .push(ValidateRequest { expected, actual });
            Ok(response)
        } else {
            Err(ConnectorError::other("no more data"))
        };
        Box::pin(std::future::ready(result))
    }
}

/// A connector that captures a single request.
#[derive(Debug, Clone)]
pub struct CaptureRequestHandler(Arc<Mutex<CaptureInner>>);

#[derive(Debug)]
struct CaptureInner {
    response: Option<HttpResponse>,
    sender: Option<oneshot::Sender<HttpRequest>>,
}

/// Receiver for [`CaptureRequestHandler`].
#[derive(Debug)]
pub struct CaptureRequestReceiver {
    receiver: oneshot::Receiver<HttpRequest>,
}

impl CaptureRequestReceiver {
    /// Panics if no request was dispatched through the paired handler.
    pub fn expect_request(mut self) -> HttpRequest {
        self.receiver.try_recv().expect("no request was received")
    }
}

impl Connector for CaptureRequestHandler {
    fn send(&self, request: HttpRequest) -> BoxFuture<Result<HttpResponse, ConnectorError>> {
        let mut inner = self.0.lock().unwrap();
        inner
            .sender
            .take()
            .expect("already sent")
            .send(request)
            .expect("channel not ready");
        let response = inner
            .response
            .take()
            .expect("could not handle second request");
        Box::pin(std::future::ready(Ok(response)))
    }
}

/// Builds a connector used to capture a single request.
///
/// If `response` is `None` the handler replies with an empty 200.
pub fn capture_request(
    response: Option<HttpResponse>,
) -> (CaptureRequestHandler, CaptureRequestReceiver) {
    let (tx, rx) = oneshot::channel();
    (
        CaptureRequestHandler(Arc::new(Mutex::new(CaptureInner {
            response: Some(response.unwrap_or_else(|| {
                http::Response::builder()
                    .status(200)
                    .body(Bytes::new())
                    .expect("unreachable")
            })),
            sender: Some(tx),
        }))),
        CaptureRequestReceiver { receiver: rx },
    )
}

/// A connector whose futures return `Pending` forever. Useful for exercising
/// timeout and cancellation paths.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct NeverConnector;

impl NeverConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connector for NeverConnector {
    fn send(&self, _request: HttpRequest) -> BoxFuture<Result<HttpResponse, ConnectorError>> {
        Box::pin(std::future::pending())
    }
}
