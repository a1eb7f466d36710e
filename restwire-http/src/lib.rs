/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Core HTTP interface used by restwire clients: the per-operation
//! marshal/unmarshal contract, the result type covering every way a call can
//! fail, and URI building helpers for REST-JSON style routing.
#![warn(missing_debug_implementations, rustdoc::all)]

pub mod error;
pub mod label;
pub mod operation;
pub mod result;

/// A fully buffered HTTP request as produced by a marshaller.
pub type HttpRequest = http::Request<bytes::Bytes>;

/// A fully buffered HTTP response as consumed by an unmarshaller.
pub type HttpResponse = http::Response<bytes::Bytes>;
