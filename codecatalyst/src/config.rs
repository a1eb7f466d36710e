/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client configuration for CodeCatalyst.

use http::Uri;
use restwire_client::metrics::SharedMetricPublisher;
use restwire_client::token::{ProvideToken, StaticTokenProvider, Token};
use std::fmt;
use std::sync::Arc;

const DEFAULT_ENDPOINT: &str = "https://codecatalyst.global.api.aws";

/// Service configuration: endpoint, identity, and client-level telemetry.
pub struct Config {
    pub(crate) endpoint: Uri,
    pub(crate) token_provider: Arc<dyn ProvideToken>,
    pub(crate) metric_publishers: Vec<SharedMetricPublisher>,
    pub(crate) app_name: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl Config {
    /// Starts building a configuration.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

/// Builder for [`Config`].
#[derive(Default)]
pub struct Builder {
    endpoint: Option<Uri>,
    token_provider: Option<Arc<dyn ProvideToken>>,
    metric_publishers: Vec<SharedMetricPublisher>,
    app_name: Option<String>,
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("endpoint", &self.endpoint)
            .field("app_name", &self.app_name)
            .finish()
    }
}

impl Builder {
    /// Overrides the endpoint. Defaults to the regionless CodeCatalyst
    /// endpoint.
    pub fn endpoint(mut self, endpoint: Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the provider of the bearer token sent with every request.
    pub fn token_provider(mut self, provider: impl ProvideToken + 'static) -> Self {
        self.token_provider = Some(Arc::new(provider));
        self
    }

    /// Convenience for a fixed personal access token.
    pub fn access_token(self, token: impl Into<Token>) -> Self {
        self.token_provider(StaticTokenProvider::new(token.into()))
    }

    /// Adds a client-level metric publisher. With none configured, metric
    /// collection is disabled.
    pub fn metric_publisher(mut self, publisher: SharedMetricPublisher) -> Self {
        self.metric_publishers.push(publisher);
        self
    }

    /// Sets an application name to append to the user agent.
    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Panics
    /// Panics if no token provider was configured.
    pub fn build(self) -> Config {
        Config {
            endpoint: self
                .endpoint
                .unwrap_or_else(|| Uri::from_static(DEFAULT_ENDPOINT)),
            token_provider: self
                .token_provider
                .expect("a token provider is required to call CodeCatalyst"),
            metric_publishers: self.metric_publishers,
            app_name: self.app_name,
        }
    }
}
