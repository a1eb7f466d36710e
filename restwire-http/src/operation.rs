/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The per-operation contract between generated-style operation shapes and the
//! generic client handler.

use crate::error::{MarshalError, UnmarshalError};
use crate::{HttpRequest, HttpResponse};
use std::borrow::Cow;

/// Metadata attached to every operation: the operation name and the service it
/// belongs to. Recorded on the per-call metric collector and in tracing spans.
#[derive(Clone, Debug)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

/// Describes one RPC verb: how to turn a typed input into a wire request and a
/// wire reply back into a typed output.
///
/// One unit struct per operation implements this trait, so the pairing of
/// marshaller, unmarshaller and metadata is fixed at the type level and the
/// client handler stays operation-agnostic. Both transformations are pure and
/// synchronous; neither may perform I/O.
pub trait ApiOperation {
    /// The typed request value. Immutable once built.
    type Input;
    /// The typed response value. Only ever produced from a 2xx wire reply.
    type Output;

    /// Operation name + service id.
    fn metadata(&self) -> Metadata;

    /// Builds the wire request for `input`.
    ///
    /// The returned request carries a *relative* URI (path and query only); the
    /// client handler grafts the configured endpoint onto it before dispatch.
    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError>;

    /// Parses a successful (2xx) wire reply into the typed output.
    ///
    /// Non-2xx replies never reach this method; the handler routes those
    /// through the error registry instead.
    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError>;
}
