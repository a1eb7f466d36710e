/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Per-call telemetry: a collector accumulates named metrics for the lifetime
//! of one call, and zero or more publishers receive the finished snapshot.
//!
//! When no publisher is configured the no-op collector is selected, which
//! neither allocates nor records. `collect` consumes the collector, so a
//! snapshot can only ever be produced (and therefore published) once per call.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

/// Metric names recorded by the client handler on every call.
#[derive(Debug)]
pub struct CoreMetric;

impl CoreMetric {
    /// The id of the service the call was made against.
    pub const SERVICE_ID: &'static str = "ServiceId";
    /// The name of the operation being invoked.
    pub const OPERATION_NAME: &'static str = "OperationName";
    /// Wall-clock duration of the call, covering marshalling through
    /// unmarshalling or error resolution.
    pub const API_CALL_DURATION: &'static str = "ApiCallDuration";
    /// Whether the call completed with a typed response.
    pub const API_CALL_SUCCESSFUL: &'static str = "ApiCallSuccessful";
    /// Which failure class terminated an unsuccessful call.
    pub const ERROR_TYPE: &'static str = "ErrorType";
}

/// A single recorded measurement.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricValue {
    String(Cow<'static, str>),
    Duration(Duration),
    Flag(bool),
}

impl From<&'static str> for MetricValue {
    fn from(value: &'static str) -> Self {
        MetricValue::String(Cow::Borrowed(value))
    }
}

impl From<String> for MetricValue {
    fn from(value: String) -> Self {
        MetricValue::String(Cow::Owned(value))
    }
}

impl From<Duration> for MetricValue {
    fn from(value: Duration) -> Self {
        MetricValue::Duration(value)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        MetricValue::Flag(value)
    }
}

/// One named metric within a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    name: &'static str,
    value: MetricValue,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &MetricValue {
        &self.value
    }
}

/// The finished, immutable record of one call's metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricSnapshot {
    scope: &'static str,
    metrics: Vec<Metric>,
}

impl MetricSnapshot {
    /// The scope name the collector was created with (empty for no-op).
    pub fn scope(&self) -> &'static str {
        self.scope
    }

    /// All recorded metrics, in recording order.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Returns the first metric recorded under `name`.
    pub fn get(&self, name: &str) -> Option<&MetricValue> {
        self.metrics
            .iter()
            .find(|m| m.name == name)
            .map(|m| &m.value)
    }
}

/// Accumulates metrics for a single call.
#[derive(Debug)]
pub struct MetricCollector {
    // `None` is the no-op collector: selected when there is no publisher to
    // hand the snapshot to, so recording costs nothing.
    inner: Option<Inner>,
}

#[derive(Debug)]
struct Inner {
    scope: &'static str,
    metrics: Vec<Metric>,
}

impl MetricCollector {
    /// Creates an active collector under the given scope name.
    pub fn new(scope: &'static str) -> Self {
        MetricCollector {
            inner: Some(Inner {
                scope,
                metrics: Vec::new(),
            }),
        }
    }

    /// Creates a collector that records nothing.
    pub fn noop() -> Self {
        MetricCollector { inner: None }
    }

    /// True if this collector discards everything reported to it.
    pub fn is_noop(&self) -> bool {
        self.inner.is_none()
    }

    /// Records one metric. Append-only and non-blocking.
    pub fn report_metric(&mut self, name: &'static str, value: impl Into<MetricValue>) {
        if let Some(inner) = &mut self.inner {
            inner.metrics.push(Metric {
                name,
                value: value.into(),
            });
        }
    }

    /// Finalizes the collector into a snapshot.
    ///
    /// Consumes `self`: a call can only ever produce one snapshot.
    pub fn collect(self) -> MetricSnapshot {
        match self.inner {
            Some(inner) => MetricSnapshot {
                scope: inner.scope,
                metrics: inner.metrics,
            },
            None => MetricSnapshot::default(),
        }
    }
}

/// Receives the finished snapshot of each call.
///
/// Publishers must not fail the call: the signature is infallible and
/// implementations are expected to log and swallow their own errors.
pub trait MetricPublisher: Send + Sync + Debug {
    fn publish(&self, snapshot: &MetricSnapshot);
}

/// A shareable metric publisher.
pub type SharedMetricPublisher = Arc<dyn MetricPublisher>;

#[cfg(test)]
mod test {
    use super::{CoreMetric, MetricCollector, MetricValue};
    use std::time::Duration;

    #[test]
    fn active_collector_preserves_recording_order() {
        let mut collector = MetricCollector::new("ApiCall");
        collector.report_metric(CoreMetric::SERVICE_ID, "CodeCatalyst");
        collector.report_metric(CoreMetric::OPERATION_NAME, "ListProjects");
        collector.report_metric(CoreMetric::API_CALL_DURATION, Duration::from_millis(15));

        let snapshot = collector.collect();
        assert_eq!(snapshot.scope(), "ApiCall");
        let names: Vec<_> = snapshot.metrics().iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec![
                CoreMetric::SERVICE_ID,
                CoreMetric::OPERATION_NAME,
                CoreMetric::API_CALL_DURATION
            ]
        );
        assert_eq!(
            snapshot.get(CoreMetric::SERVICE_ID),
            Some(&MetricValue::from("CodeCatalyst"))
        );
    }

    #[test]
    fn noop_collector_records_nothing() {
        let mut collector = MetricCollector::noop();
        assert!(collector.is_noop());
        collector.report_metric(CoreMetric::SERVICE_ID, "CodeCatalyst");
        let snapshot = collector.collect();
        assert!(snapshot.metrics().is_empty());
    }
}
