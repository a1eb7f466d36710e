/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The CodeCatalyst client: one thin async method per operation.

use crate::config::Config;
use crate::error::{self, Error};
use crate::input::{
    CreateAccessTokenInput, CreateDevEnvironmentInput, DeleteAccessTokenInput, GetProjectInput,
    ListProjectsInput,
};
use crate::operation::{
    CreateAccessToken, CreateDevEnvironment, DeleteAccessToken, GetProject, ListProjects,
};
use crate::output::{
    CreateAccessTokenOutput, CreateDevEnvironmentOutput, DeleteAccessTokenOutput, GetProjectOutput,
    ListProjectsOutput,
};
use restwire_client::{Connector, SdkError};

#[cfg(feature = "hyper")]
use restwire_client::hyper_impls::HyperConnector;

/// Client for Amazon CodeCatalyst.
///
/// Cheap to clone; all clones share the underlying transport.
#[derive(Clone, Debug)]
pub struct Client<C> {
    handle: restwire_client::Client<C, Error>,
}

#[cfg(feature = "hyper")]
impl Client<HyperConnector> {
    /// Constructs a client from configuration using an HTTPS transport.
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, HyperConnector::https())
    }
}

impl<C> Client<C>
where
    C: Connector,
{
    /// Constructs a client from configuration and an explicit connector.
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let mut builder = restwire_client::Client::builder()
            .connector(conn)
            .endpoint(conf.endpoint)
            .shared_token_provider(conf.token_provider)
            .error_registry(error::error_registry());
        for publisher in conf.metric_publishers {
            builder = builder.metric_publisher(publisher);
        }
        if let Some(app_name) = conf.app_name {
            builder = builder.app_name(app_name);
        }
        Client {
            handle: builder.build(),
        }
    }

    /// Releases the client. Calls made after this fail fast; in-flight calls
    /// run to completion.
    pub fn close(&self) {
        self.handle.close();
    }

    /// Creates a personal access token for the calling user.
    pub async fn create_access_token(
        &self,
        mut input: CreateAccessTokenInput,
    ) -> Result<CreateAccessTokenOutput, SdkError<Error>> {
        let override_config = input.override_config.take();
        self.handle
            .call_with_config(&CreateAccessToken, input, override_config)
            .await
    }

    /// Deletes a personal access token. Succeeds even when the id is unknown.
    pub async fn delete_access_token(
        &self,
        mut input: DeleteAccessTokenInput,
    ) -> Result<DeleteAccessTokenOutput, SdkError<Error>> {
        let override_config = input.override_config.take();
        self.handle
            .call_with_config(&DeleteAccessToken, input, override_config)
            .await
    }

    /// Describes one project in a space.
    pub async fn get_project(
        &self,
        mut input: GetProjectInput,
    ) -> Result<GetProjectOutput, SdkError<Error>> {
        let override_config = input.override_config.take();
        self.handle
            .call_with_config(&GetProject, input, override_config)
            .await
    }

    /// Lists the projects in a space, one page at a time.
    pub async fn list_projects(
        &self,
        mut input: ListProjectsInput,
    ) -> Result<ListProjectsOutput, SdkError<Error>> {
        let override_config = input.override_config.take();
        self.handle
            .call_with_config(&ListProjects, input, override_config)
            .await
    }

    /// Creates a Dev Environment in a project.
    pub async fn create_dev_environment(
        &self,
        mut input: CreateDevEnvironmentInput,
    ) -> Result<CreateDevEnvironmentOutput, SdkError<Error>> {
        let override_config = input.override_config.take();
        self.handle
            .call_with_config(&CreateDevEnvironment, input, override_config)
            .await
    }
}
