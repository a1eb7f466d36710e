/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error metadata shared by all modeled service errors.

use std::fmt;

/// Trait to retrieve error metadata from a modeled service error.
pub trait ProvideErrorMetadata {
    /// Returns error metadata, which includes the error code, message and request ID.
    fn meta(&self) -> &ErrorMetadata;

    /// Returns the service-defined error code if it's available.
    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Returns the error message, if there is one.
    fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    /// Returns the request ID echoed back by the service, if there is one.
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

/// Generic error metadata.
///
/// Many services only partially model their errors. Whatever the wire reply carried
/// (`code`, `message`, request ID) is preserved here so it is available even when the
/// error code did not match a modeled variant.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`ErrorMetadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorMetadata,
}

impl Builder {
    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the request ID.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error metadata.
    pub fn build(self) -> ErrorMetadata {
        self.inner
    }
}

impl ErrorMetadata {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Creates an `ErrorMetadata` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts the metadata back into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("ErrorMetadata");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for ErrorMetadata {}

#[cfg(test)]
mod test {
    use super::ErrorMetadata;

    #[test]
    fn builder_round_trips_fields() {
        let meta = ErrorMetadata::builder()
            .code("ThrottlingException")
            .message("Rate exceeded")
            .request_id("req-123")
            .build();
        assert_eq!(meta.code(), Some("ThrottlingException"));
        assert_eq!(meta.message(), Some("Rate exceeded"));
        assert_eq!(meta.request_id(), Some("req-123"));
    }

    #[test]
    fn display_skips_unset_fields() {
        let meta = ErrorMetadata::builder().message("oops").build();
        let rendered = format!("{}", meta);
        assert!(rendered.contains("oops"));
        assert!(!rendered.contains("code"));
    }
}
