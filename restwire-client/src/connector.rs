/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The transport seam: anything that can exchange one HTTP request for one
//! HTTP response.
//!
//! Connection pooling, TLS and transport-level retries all live behind this
//! trait. The client handler only ever calls [`Connector::send`] and treats
//! the implementation as an internally thread-safe collaborator.

use restwire_http::{HttpRequest, HttpResponse};
use std::error::Error;
use std::fmt;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;

type BoxError = Box<dyn Error + Send + Sync>;

/// Boxed future returned by [`Connector::send`].
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// An asynchronous HTTP transport.
///
/// `send` must return promptly; the actual network exchange happens when the
/// returned future is polled. Dropping the future is the cancellation
/// mechanism: implementations must not leak resources when a send is dropped
/// mid-flight.
pub trait Connector: Send + Sync + Debug {
    /// Dispatches one request, resolving to the full (buffered) response.
    fn send(&self, request: HttpRequest) -> BoxFuture<Result<HttpResponse, ConnectorError>>;
}

#[derive(Debug)]
enum ConnectorErrorKind {
    /// The exchange failed at the transport level (connection refused, broken
    /// pipe, TLS failure). An HTTP response was never received.
    Io,
    /// The exchange did not complete within the configured time budget.
    Timeout,
    /// Any failure the transport cannot classify.
    Other,
}

/// A failure to exchange the request for a response.
#[derive(Debug)]
pub struct ConnectorError {
    kind: ConnectorErrorKind,
    source: BoxError,
}

impl ConnectorError {
    /// Constructs a transport-level I/O failure.
    pub fn io(source: impl Into<BoxError>) -> Self {
        ConnectorError {
            kind: ConnectorErrorKind::Io,
            source: source.into(),
        }
    }

    /// Constructs a timeout failure.
    pub fn timeout(source: impl Into<BoxError>) -> Self {
        ConnectorError {
            kind: ConnectorErrorKind::Timeout,
            source: source.into(),
        }
    }

    /// Constructs an unclassified failure.
    pub fn other(source: impl Into<BoxError>) -> Self {
        ConnectorError {
            kind: ConnectorErrorKind::Other,
            source: source.into(),
        }
    }

    /// True if the failure was a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Timeout)
    }

    /// True if the failure happened at the transport level.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ConnectorErrorKind::Io)
    }
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConnectorErrorKind::Io => write!(f, "io error while dispatching request"),
            ConnectorErrorKind::Timeout => write!(f, "request did not complete in time"),
            ConnectorErrorKind::Other => write!(f, "failed to dispatch request"),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}
