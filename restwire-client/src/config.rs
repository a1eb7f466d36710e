/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-request override configuration.
//!
//! A request may carry one of these to tighten the time budget, route its
//! metrics to additional publishers, or tag the user agent for a single call.
//! Anything left unset falls back to the client-level configuration.

use crate::metrics::SharedMetricPublisher;
use std::fmt;
use std::time::Duration;

/// Overrides applied to a single call.
#[derive(Clone, Default)]
pub struct RequestOverrideConfig {
    api_call_timeout: Option<Duration>,
    metric_publishers: Vec<SharedMetricPublisher>,
    app_names: Vec<String>,
}

impl fmt::Debug for RequestOverrideConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOverrideConfig")
            .field("api_call_timeout", &self.api_call_timeout)
            .field("metric_publishers", &self.metric_publishers.len())
            .field("app_names", &self.app_names)
            .finish()
    }
}

impl RequestOverrideConfig {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Time budget for the entire call, from marshalling through unmarshalling.
    pub fn api_call_timeout(&self) -> Option<Duration> {
        self.api_call_timeout
    }

    /// When non-empty, replaces the client-level publisher set for this call.
    pub fn metric_publishers(&self) -> &[SharedMetricPublisher] {
        &self.metric_publishers
    }

    /// Extra application names appended to the user agent for this call.
    pub fn app_names(&self) -> &[String] {
        &self.app_names
    }
}

/// Builder for [`RequestOverrideConfig`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    inner: RequestOverrideConfig,
}

impl Builder {
    pub fn api_call_timeout(mut self, timeout: Duration) -> Self {
        self.inner.api_call_timeout = Some(timeout);
        self
    }

    pub fn metric_publisher(mut self, publisher: SharedMetricPublisher) -> Self {
        self.inner.metric_publishers.push(publisher);
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.inner.app_names.push(name.into());
        self
    }

    pub fn build(self) -> RequestOverrideConfig {
        self.inner
    }
}
