/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic value types shared by restwire clients.
#![warn(missing_debug_implementations, missing_docs, rustdoc::all)]

pub mod error;

pub use error::{ErrorMetadata, ProvideErrorMetadata};
