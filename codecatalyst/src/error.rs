/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! All errors the CodeCatalyst service can return, plus the registry that maps
//! wire-level error codes onto them.

use restwire_client::registry::{ErrorRegistry, ErrorRegistryBuilder};
use restwire_types::{ErrorMetadata, ProvideErrorMetadata};
use std::fmt;

macro_rules! modeled_exception {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Clone, Debug, PartialEq)]
        #[non_exhaustive]
        pub struct $name {
            meta: ErrorMetadata,
            status: u16,
        }

        impl $name {
            pub(crate) fn new(meta: ErrorMetadata, status: u16) -> Self {
                Self { meta, status }
            }

            /// The failure description returned by the service, if any.
            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }

            /// The HTTP status this error is modeled with.
            pub fn status(&self) -> u16 {
                self.status
            }
        }

        impl ProvideErrorMetadata for $name {
            fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", stringify!($name))?;
                if let Some(message) = self.message() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}
    };
}

modeled_exception! {
    /// The caller does not have sufficient access to perform the action.
    AccessDeniedException
}
modeled_exception! {
    /// The request could not be completed because the target resource is in a
    /// conflicting state.
    ConflictException
}
modeled_exception! {
    /// The specified resource was not found.
    ResourceNotFoundException
}
modeled_exception! {
    /// The request would exceed a service quota.
    ServiceQuotaExceededException
}
modeled_exception! {
    /// The request was denied due to throttling.
    ThrottlingException
}
modeled_exception! {
    /// The input fails to satisfy the constraints specified by the service.
    ValidationException
}

/// An error the service returned under a code no variant models.
///
/// The original code, message, request id and wire status are preserved so
/// callers can still log and branch on them.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Unhandled {
    meta: ErrorMetadata,
    status: u16,
}

impl Unhandled {
    pub(crate) fn new(meta: ErrorMetadata, status: u16) -> Self {
        Self { meta, status }
    }

    /// The unrecognized error code, if the response carried one.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// The HTTP status of the wire response.
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl ProvideErrorMetadata for Unhandled {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}

impl fmt::Display for Unhandled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unhandled service error")?;
        if let Some(code) = self.code() {
            write!(f, " (code: {})", code)?;
        }
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Unhandled {}

/// All possible error types for CodeCatalyst operations.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The caller does not have sufficient access to perform the action.
    AccessDeniedException(AccessDeniedException),
    /// The target resource is in a conflicting state.
    ConflictException(ConflictException),
    /// The specified resource was not found.
    ResourceNotFoundException(ResourceNotFoundException),
    /// The request would exceed a service quota.
    ServiceQuotaExceededException(ServiceQuotaExceededException),
    /// The request was denied due to throttling.
    ThrottlingException(ThrottlingException),
    /// The input fails to satisfy the service's constraints.
    ValidationException(ValidationException),
    /// An error under a code this client does not model.
    Unhandled(Unhandled),
}

impl ProvideErrorMetadata for Error {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Error::AccessDeniedException(e) => e.meta(),
            Error::ConflictException(e) => e.meta(),
            Error::ResourceNotFoundException(e) => e.meta(),
            Error::ServiceQuotaExceededException(e) => e.meta(),
            Error::ThrottlingException(e) => e.meta(),
            Error::ValidationException(e) => e.meta(),
            Error::Unhandled(e) => e.meta(),
        }
    }
}

impl Error {
    /// The HTTP status associated with this error: the modeled status for a
    /// recognized code, the wire status otherwise.
    pub fn status(&self) -> u16 {
        match self {
            Error::AccessDeniedException(e) => e.status(),
            Error::ConflictException(e) => e.status(),
            Error::ResourceNotFoundException(e) => e.status(),
            Error::ServiceQuotaExceededException(e) => e.status(),
            Error::ThrottlingException(e) => e.status(),
            Error::ValidationException(e) => e.status(),
            Error::Unhandled(e) => e.status(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccessDeniedException(e) => e.fmt(f),
            Error::ConflictException(e) => e.fmt(f),
            Error::ResourceNotFoundException(e) => e.fmt(f),
            Error::ServiceQuotaExceededException(e) => e.fmt(f),
            Error::ThrottlingException(e) => e.fmt(f),
            Error::ValidationException(e) => e.fmt(f),
            Error::Unhandled(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

/// Builds the registry pairing each modeled error code with its constructor.
///
/// `resolve` on the returned registry is total: any unrecognized, missing or
/// malformed code falls back to [`Unhandled`].
pub(crate) fn error_registry() -> ErrorRegistry<Error> {
    ErrorRegistryBuilder::new(|meta, status| Error::Unhandled(Unhandled::new(meta, status)))
        .register("AccessDeniedException", 403, |meta, status| {
            Error::AccessDeniedException(AccessDeniedException::new(meta, status))
        })
        .register("ConflictException", 409, |meta, status| {
            Error::ConflictException(ConflictException::new(meta, status))
        })
        .register("ResourceNotFoundException", 404, |meta, status| {
            Error::ResourceNotFoundException(ResourceNotFoundException::new(meta, status))
        })
        .register("ServiceQuotaExceededException", 402, |meta, status| {
            Error::ServiceQuotaExceededException(ServiceQuotaExceededException::new(meta, status))
        })
        .register("ThrottlingException", 429, |meta, status| {
            Error::ThrottlingException(ThrottlingException::new(meta, status))
        })
        .register("ValidationException", 400, |meta, status| {
            Error::ValidationException(ValidationException::new(meta, status))
        })
        .build()
}
