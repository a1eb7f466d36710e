/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The failure side of every call: exactly one [`SdkError`] variant terminates
//! a failed call.
//!
//! Callers branch on "the service said no" ([`SdkError::ServiceError`], carrying
//! a typed modeled error) vs. "the call never reached or never returned from
//! the service" (the other variants) to decide whether retrying is sane.

use crate::HttpResponse;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Failed result of dispatching an operation.
///
/// `E` is the service's modeled error type (a closed tagged union with an
/// unhandled fallback variant).
#[derive(Debug)]
pub enum SdkError<E> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according to the protocol.
    ResponseError {
        /// The raw HTTP response.
        raw: HttpResponse,
        /// The parse failure.
        err: BoxError,
    },

    /// An error response was received from the service, resolved to a modeled error.
    ServiceError {
        /// The raw HTTP response.
        raw: HttpResponse,
        /// The resolved modeled error.
        err: E,
    },
}

impl<E> SdkError<E> {
    /// Returns a reference to the modeled service error, if this is one.
    pub fn as_service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Consumes the error, returning the modeled service error if this is one
    /// and `self` otherwise.
    pub fn into_service_error(self) -> Result<E, Self> {
        match self {
            SdkError::ServiceError { err, .. } => Ok(err),
            other => Err(other),
        }
    }

    /// Returns the raw HTTP response, if one was received.
    pub fn raw_response(&self) -> Option<&HttpResponse> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E> Display for SdkError<E>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(_) => write!(f, "failed to construct request"),
            SdkError::DispatchFailure(_) => write!(f, "failed to dispatch request"),
            SdkError::ResponseError { .. } => write!(f, "failed to parse response"),
            SdkError::ServiceError { err, .. } => Display::fmt(err, f),
        }
    }
}

impl<E> Error for SdkError<E>
where
    E: Error + 'static,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}
