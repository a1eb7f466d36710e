/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client-side errors raised on the marshal/unmarshal boundary.
//!
//! These are deliberately distinct from modeled service errors: a
//! [`MarshalError`] or [`UnmarshalError`] means the call never produced, or the
//! client could not understand, a wire exchange. They are never resolved
//! through the error registry.

use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
enum MarshalErrorKind {
    /// A field required to build the request (for example a URI path label) was
    /// not set on the input.
    MissingField {
        field: &'static str,
    },
    /// A field was set but its value cannot appear in a request (for example an
    /// empty path label, which would change the route).
    InvalidField {
        field: &'static str,
        message: String,
    },
    SerializationFailure(BoxError),
}

/// The request could not be constructed from the typed input.
///
/// Surfaces to the caller as [`SdkError::ConstructionFailure`](crate::result::SdkError).
#[derive(Debug)]
pub struct MarshalError {
    kind: MarshalErrorKind,
}

impl MarshalError {
    pub fn missing_field(field: &'static str) -> Self {
        MarshalError {
            kind: MarshalErrorKind::MissingField { field },
        }
    }

    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        MarshalError {
            kind: MarshalErrorKind::InvalidField {
                field,
                message: message.into(),
            },
        }
    }

    pub fn serialization(source: impl Into<BoxError>) -> Self {
        MarshalError {
            kind: MarshalErrorKind::SerializationFailure(source.into()),
        }
    }
}

impl fmt::Display for MarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MarshalErrorKind::MissingField { field } => {
                write!(f, "required field `{}` was not set", field)
            }
            MarshalErrorKind::InvalidField { field, message } => {
                write!(f, "invalid value for field `{}`: {}", field, message)
            }
            MarshalErrorKind::SerializationFailure(_) => {
                write!(f, "failed to serialize the request body")
            }
        }
    }
}

impl Error for MarshalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            MarshalErrorKind::SerializationFailure(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// A 2xx wire reply did not parse under the operation's declared output shape.
///
/// Surfaces to the caller as [`SdkError::ResponseError`](crate::result::SdkError).
#[derive(Debug)]
pub struct UnmarshalError {
    source: BoxError,
}

impl UnmarshalError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        UnmarshalError {
            source: source.into(),
        }
    }
}

impl fmt::Display for UnmarshalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse the response body")
    }
}

impl Error for UnmarshalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}
