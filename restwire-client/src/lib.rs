/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A generic asynchronous handler for typed REST-JSON service clients.
//!
//! [`Client`] executes one RPC call end-to-end: marshal the typed input,
//! attach identity, dispatch through a [`Connector`], then either unmarshal
//! the typed output (2xx) or resolve a modeled error through the
//! [`ErrorRegistry`](registry::ErrorRegistry) (non-2xx). Per-call metrics are
//! published exactly once, on every path, before the caller observes the
//! outcome.
//!
//! The handler is operation-agnostic: everything operation-specific arrives
//! through an [`ApiOperation`] implementation supplied by a service crate.
//! There is no retry in this layer; retry policy belongs to a layer above it.
#![warn(missing_debug_implementations, rustdoc::all)]

pub mod config;
pub mod connector;
mod endpoint;
pub mod metrics;
pub mod registry;
pub mod token;

#[cfg(feature = "hyper")]
pub mod hyper_impls;

pub mod test_connection;

pub use config::RequestOverrideConfig;
pub use connector::{BoxFuture, Connector, ConnectorError};
pub use restwire_http::result::SdkError;

use crate::metrics::{CoreMetric, MetricCollector, SharedMetricPublisher};
use crate::registry::{ErrorRegistry, WireError};
use crate::token::ProvideToken;
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::{HeaderValue, Uri};
use restwire_http::operation::{ApiOperation, Metadata};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

const METRIC_SCOPE: &str = "ApiCall";

/// A service client: one shared handler plus the read-only pieces every call
/// needs (endpoint, identity, error registry, metric publishers).
///
/// Cloning is cheap and clones share all state, including the transport.
pub struct Client<C, E> {
    inner: Arc<Inner<C, E>>,
}

struct Inner<C, E> {
    connector: C,
    endpoint: Uri,
    token_provider: Arc<dyn ProvideToken>,
    registry: ErrorRegistry<E>,
    publishers: Vec<SharedMetricPublisher>,
    app_name: Option<String>,
    closed: AtomicBool,
}

impl<C, E> Clone for Client<C, E> {
    fn clone(&self) -> Self {
        Client {
            inner: self.inner.clone(),
        }
    }
}

impl<C: fmt::Debug, E> fmt::Debug for Client<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("connector", &self.inner.connector)
            .field("endpoint", &self.inner.endpoint)
            .field("registry", &self.inner.registry)
            .field("closed", &self.inner.closed)
            .finish()
    }
}

impl<E> Client<(), E> {
    /// Starts building a client. A connector, endpoint, token provider and
    /// error registry must be supplied before [`Builder::build`].
    pub fn builder() -> Builder<(), E> {
        Builder::new()
    }
}

impl<C, E> Client<C, E> {
    /// Marks the client closed. Every subsequent call fails fast with a
    /// construction error. Transport resources are released when the last
    /// clone of the client is dropped.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
    }

    /// True once [`close`](Client::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }
}

impl<C, E> Client<C, E>
where
    C: Connector,
{
    /// Executes one operation with no per-request overrides.
    pub async fn call<O>(&self, operation: &O, input: O::Input) -> Result<O::Output, SdkError<E>>
    where
        O: ApiOperation,
    {
        self.call_with_config(operation, input, None).await
    }

    /// Executes one operation.
    ///
    /// The returned future resolves to the typed output or exactly one
    /// [`SdkError`]. Dropping the future cancels the call: an in-flight
    /// dispatch is abandoned (best effort, the request may already have been
    /// sent) and the call can never resolve with an output afterwards.
    pub async fn call_with_config<O>(
        &self,
        operation: &O,
        input: O::Input,
        override_config: Option<RequestOverrideConfig>,
    ) -> Result<O::Output, SdkError<E>>
    where
        O: ApiOperation,
    {
        let metadata = operation.metadata();
        let span = tracing::debug_span!(
            "call",
            service = %metadata.service(),
            operation = %metadata.name(),
        );
        self.call_instrumented(operation, input, override_config, metadata)
            .instrument(span)
            .await
    }

    async fn call_instrumented<O>(
        &self,
        operation: &O,
        input: O::Input,
        override_config: Option<RequestOverrideConfig>,
        metadata: Metadata,
    ) -> Result<O::Output, SdkError<E>>
    where
        O: ApiOperation,
    {
        let publishers = self.resolve_publishers(override_config.as_ref());
        let mut collector = if publishers.is_empty() {
            MetricCollector::noop()
        } else {
            MetricCollector::new(METRIC_SCOPE)
        };
        // Recorded up front so even calls that die before dispatch are
        // attributed to their operation.
        collector.report_metric(CoreMetric::SERVICE_ID, metadata.service().to_string());
        collector.report_metric(CoreMetric::OPERATION_NAME, metadata.name().to_string());

        let start = Instant::now();
        let attempt = self.attempt(operation, &input, override_config.as_ref());
        let result = match override_config.as_ref().and_then(|c| c.api_call_timeout()) {
            Some(budget) => match tokio::time::timeout(budget, attempt).await {
                Ok(result) => result,
                Err(elapsed) => Err(SdkError::DispatchFailure(
                    ConnectorError::timeout(elapsed).into(),
                )),
            },
            None => attempt.await,
        };

        collector.report_metric(CoreMetric::API_CALL_DURATION, start.elapsed());
        collector.report_metric(CoreMetric::API_CALL_SUCCESSFUL, result.is_ok());
        if let Err(err) = &result {
            collector.report_metric(CoreMetric::ERROR_TYPE, error_type(err));
        }

        // Publishing happens on this path, in this task, so a caller that sees
        // the future complete has happened-after every publish.
        let snapshot = collector.collect();
        for publisher in &publishers {
            publisher.publish(&snapshot);
        }
        result
    }

    async fn attempt<O>(
        &self,
        operation: &O,
        input: &O::Input,
        override_config: Option<&RequestOverrideConfig>,
    ) -> Result<O::Output, SdkError<E>>
    where
        O: ApiOperation,
    {
        if self.is_closed() {
            return Err(SdkError::ConstructionFailure(ClosedClientError.into()));
        }

        let mut request = operation
            .marshal(input)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        endpoint::apply_endpoint(&mut request, &self.inner.endpoint)
            .map_err(SdkError::ConstructionFailure)?;

        let token = self
            .inner
            .token_provider
            .provide_token()
            .map_err(SdkError::ConstructionFailure)?;
        let mut auth = HeaderValue::try_from(format!("Bearer {}", token.token()))
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        auth.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, auth);

        let user_agent = self.user_agent(override_config);
        request.headers_mut().insert(
            USER_AGENT,
            HeaderValue::try_from(user_agent)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?,
        );
        if !request.body().is_empty() && !request.headers().contains_key(CONTENT_TYPE) {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        tracing::debug!(uri = %request.uri(), "dispatching request");
        let response = self
            .inner
            .connector
            .send(request)
            .await
            .map_err(|err| SdkError::DispatchFailure(err.into()))?;

        if response.status().is_success() {
            match operation.unmarshal(&response) {
                Ok(output) => Ok(output),
                Err(err) => Err(SdkError::ResponseError {
                    raw: response,
                    err: err.into(),
                }),
            }
        } else {
            let err = self
                .inner
                .registry
                .resolve(WireError::from_response(&response));
            Err(SdkError::ServiceError { raw: response, err })
        }
    }

    fn resolve_publishers(
        &self,
        override_config: Option<&RequestOverrideConfig>,
    ) -> Vec<SharedMetricPublisher> {
        match override_config {
            Some(config) if !config.metric_publishers().is_empty() => {
                config.metric_publishers().to_vec()
            }
            _ => self.inner.publishers.clone(),
        }
    }

    fn user_agent(&self, override_config: Option<&RequestOverrideConfig>) -> String {
        let mut user_agent = format!("restwire/{}", env!("CARGO_PKG_VERSION"));
        if let Some(app_name) = &self.inner.app_name {
            user_agent.push_str(&format!(" app/{}", app_name));
        }
        if let Some(config) = override_config {
            for name in config.app_names() {
                user_agent.push_str(&format!(" app/{}", name));
            }
        }
        user_agent
    }
}

/// The error used to fail calls made after [`Client::close`].
#[derive(Debug)]
#[non_exhaustive]
pub struct ClosedClientError;

impl fmt::Display for ClosedClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the client has been closed")
    }
}

impl Error for ClosedClientError {}

fn error_type<E>(err: &SdkError<E>) -> &'static str {
    match err {
        SdkError::ConstructionFailure(_) => "construction",
        SdkError::DispatchFailure(_) => "dispatch",
        SdkError::ResponseError { .. } => "response",
        SdkError::ServiceError { .. } => "service",
    }
}

/// A builder that assembles a [`Client`].
///
/// Like the connector, the registry's error type is decided by whichever
/// service crate drives the builder.
pub struct Builder<C, E> {
    connector: C,
    endpoint: Option<Uri>,
    token_provider: Option<Arc<dyn ProvideToken>>,
    registry: Option<ErrorRegistry<E>>,
    publishers: Vec<SharedMetricPublisher>,
    app_name: Option<String>,
}

impl<C: fmt::Debug, E> fmt::Debug for Builder<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("connector", &self.connector)
            .field("endpoint", &self.endpoint)
            .field("publishers", &self.publishers.len())
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl<E> Default for Builder<(), E> {
    fn default() -> Self {
        Builder {
            connector: (),
            endpoint: None,
            token_provider: None,
            registry: None,
            publishers: Vec::new(),
            app_name: None,
        }
    }
}

impl<E> Builder<(), E> {
    /// Constructs a new, unconfigured builder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, E> Builder<C, E> {
    /// Specifies the transport the client dispatches through.
    pub fn connector<C2>(self, connector: C2) -> Builder<C2, E> {
        Builder {
            connector,
            endpoint: self.endpoint,
            token_provider: self.token_provider,
            registry: self.registry,
            publishers: self.publishers,
            app_name: self.app_name,
        }
    }

    /// Specifies the endpoint every request is routed to. Must carry a scheme
    /// and authority; may carry a base path.
    pub fn endpoint(mut self, endpoint: Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Specifies the bearer-token provider consulted on every call.
    pub fn token_provider(mut self, provider: impl ProvideToken + 'static) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    /// Specifies an already-shared token provider.
    pub fn shared_token_provider(mut self, provider: Arc<dyn ProvideToken>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Specifies the service's error registry.
    pub fn error_registry(mut self, registry: ErrorRegistry<E>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Adds a client-level metric publisher. May be called repeatedly; an
    /// empty set disables metric collection entirely.
    pub fn metric_publisher(mut self, publisher: SharedMetricPublisher) -> Self {
        self.publishers.push(publisher);
        self
    }

    /// Sets the application name reported in the user agent.
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Builds the client.
    ///
    /// # Panics
    /// Panics if the endpoint, token provider or error registry was not set.
    pub fn build(self) -> Client<C, E>
    where
        C: Connector,
    {
        Client {
            inner: Arc::new(Inner {
                connector: self.connector,
                endpoint: self.endpoint.expect("an endpoint is required"),
                token_provider: self
                    .token_provider
                    .expect("a token provider is required"),
                registry: self.registry.expect("an error registry is required"),
                publishers: self.publishers,
                app_name: self.app_name,
                closed: AtomicBool::new(false),
            }),
        }
    }
}
