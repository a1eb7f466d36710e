/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Resolution of wire-level error replies into modeled service errors.
//!
//! The registry is populated once at client construction with the service's
//! known error codes and is read-only afterwards. Resolution never fails:
//! anything that doesn't match a registered code (including a reply with no
//! recognizable code at all) degrades to the registry's fallback constructor.

use bytes::Bytes;
use restwire_http::HttpResponse;
use restwire_types::ErrorMetadata;
use std::fmt;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// Constructs a modeled error from the wire metadata and the HTTP status.
pub type ErrorFactory<E> = fn(ErrorMetadata, u16) -> E;

struct Entry<E> {
    code: &'static str,
    http_status: u16,
    factory: ErrorFactory<E>,
}

/// Maps service error codes to modeled error constructors.
pub struct ErrorRegistry<E> {
    entries: Vec<Entry<E>>,
    fallback: ErrorFactory<E>,
}

impl<E> fmt::Debug for ErrorRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRegistry")
            .field(
                "codes",
                &self.entries.iter().map(|e| e.code).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for [`ErrorRegistry`].
///
/// The fallback constructor is mandatory up front so that a registry can never
/// exist without a degradation path for unknown codes.
pub struct ErrorRegistryBuilder<E> {
    entries: Vec<Entry<E>>,
    fallback: ErrorFactory<E>,
}

impl<E> ErrorRegistryBuilder<E> {
    /// Starts a registry whose unmatched errors resolve through `fallback`.
    pub fn new(fallback: ErrorFactory<E>) -> Self {
        ErrorRegistryBuilder {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Registers one modeled error code.
    ///
    /// `http_status` is the status the service documents for this code; a
    /// matched resolution carries it regardless of what the wire claimed.
    pub fn register(mut self, code: &'static str, http_status: u16, factory: ErrorFactory<E>) -> Self {
        self.entries.push(Entry {
            code,
            http_status,
            factory,
        });
        self
    }

    pub fn build(self) -> ErrorRegistry<E> {
        ErrorRegistry {
            entries: self.entries,
            fallback: self.fallback,
        }
    }
}

impl<E> ErrorRegistry<E> {
    /// Resolves a parsed wire error into the modeled error type.
    pub fn resolve(&self, wire: WireError) -> E {
        let entry = wire
            .code
            .as_deref()
            .and_then(|code| self.entries.iter().find(|e| e.code == code));
        let status = wire.status;
        let meta = wire.into_metadata();
        match entry {
            Some(entry) => (entry.factory)(meta, entry.http_status),
            None => (self.fallback)(meta, status),
        }
    }
}

/// The error-relevant parts of a non-2xx wire reply.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WireError {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    status: u16,
}

impl WireError {
    /// Creates a wire error from explicit parts.
    pub fn new(
        code: Option<String>,
        message: Option<String>,
        request_id: Option<String>,
        status: u16,
    ) -> Self {
        WireError {
            code: code.map(|c| sanitize_error_code(&c).to_string()),
            message,
            request_id,
            status,
        }
    }

    /// Extracts the error parts from a non-2xx REST-JSON reply.
    ///
    /// The error code is read from the `x-amzn-errortype` header, falling back
    /// to the body's `__type` or `code` field; the message from the body's
    /// `message`/`Message`; the request id from the `x-amzn-requestid` header.
    /// A malformed or empty body degrades to a wire error that carries only
    /// the HTTP status.
    pub fn from_response(response: &HttpResponse) -> Self {
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(|v| v.to_string())
        };

        let body = parse_error_body(response.body());
        let code = header(ERROR_TYPE_HEADER)
            .or_else(|| body.as_ref().and_then(body_error_code))
            .map(|c| sanitize_error_code(&c).to_string());
        let message = body.as_ref().and_then(body_error_message);
        let request_id = header(REQUEST_ID_HEADER);

        WireError {
            code,
            message,
            request_id,
            status: response.status().as_u16(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    fn into_metadata(self) -> ErrorMetadata {
        let mut builder = ErrorMetadata::builder();
        if let Some(code) = self.code {
            builder = builder.code(code);
        }
        if let Some(message) = self.message {
            builder = builder.message(message);
        }
        if let Some(request_id) = self.request_id {
            builder = builder.request_id(request_id);
        }
        builder.build()
    }
}

fn parse_error_body(body: &Bytes) -> Option<serde_json::Value> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "error response body was not valid JSON");
            None
        }
    }
}

fn body_error_code(body: &serde_json::Value) -> Option<String> {
    body.get("__type")
        .or_else(|| body.get("code"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
}

fn body_error_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .or_else(|| body.get("Message"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
}

/// Strips the namespace prefix and URI suffix some services attach to error
/// codes, e.g. `aws.codecatalyst#ThrottlingException:http://internal` becomes
/// `ThrottlingException`.
fn sanitize_error_code(code: &str) -> &str {
    let code = code.split(':').next().unwrap_or(code);
    match code.rsplit_once('#') {
        Some((_, suffix)) => suffix,
        None => code,
    }
}
