/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Input shapes for CodeCatalyst operations.
//!
//! Fields bound to the request path are skipped during body serialization;
//! the marshaller writes them into the URI instead.

use crate::model::{IdeConfiguration, PersistentStorageConfiguration, RepositoryInput};
use restwire_client::RequestOverrideConfig;
use serde::Serialize;

/// Input for creating a personal access token (PAT).
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateAccessTokenInput {
    /// The friendly name of the token.
    pub name: Option<String>,
    /// The date and time the token expires, in RFC 3339 date-time format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_time: Option<String>,
    #[serde(skip)]
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl CreateAccessTokenInput {
    pub fn builder() -> CreateAccessTokenInputBuilder {
        CreateAccessTokenInputBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CreateAccessTokenInputBuilder {
    inner: CreateAccessTokenInput,
}

impl CreateAccessTokenInputBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    pub fn expires_time(mut self, expires_time: impl Into<String>) -> Self {
        self.inner.expires_time = Some(expires_time.into());
        self
    }

    /// Per-request configuration overriding the client configuration.
    pub fn override_config(mut self, config: RequestOverrideConfig) -> Self {
        self.inner.override_config = Some(config);
        self
    }

    pub fn build(self) -> CreateAccessTokenInput {
        self.inner
    }
}

/// Input for deleting a personal access token.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DeleteAccessTokenInput {
    /// The id of the token to delete.
    pub id: Option<String>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl DeleteAccessTokenInput {
    pub fn builder() -> DeleteAccessTokenInputBuilder {
        DeleteAccessTokenInputBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct DeleteAccessTokenInputBuilder {
    inner: DeleteAccessTokenInput,
}

impl DeleteAccessTokenInputBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    /// Per-request configuration overriding the client configuration.
    pub fn override_config(mut self, config: RequestOverrideConfig) -> Self {
        self.inner.override_config = Some(config);
        self
    }

    pub fn build(self) -> DeleteAccessTokenInput {
        self.inner
    }
}

/// Input for describing a project.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct GetProjectInput {
    /// The name of the space the project belongs to.
    pub space_name: Option<String>,
    /// The name of the project.
    pub name: Option<String>,
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl GetProjectInput {
    pub fn builder() -> GetProjectInputBuilder {
        GetProjectInputBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct GetProjectInputBuilder {
    inner: GetProjectInput,
}

impl GetProjectInputBuilder {
    pub fn space_name(mut self, space_name: impl Into<String>) -> Self {
        self.inner.space_name = Some(space_name.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.name = Some(name.into());
        self
    }

    /// Per-request configuration overriding the client configuration.
    pub fn override_config(mut self, config: RequestOverrideConfig) -> Self {
        self.inner.override_config = Some(config);
        self
    }

    pub fn build(self) -> GetProjectInput {
        self.inner
    }
}

/// Input for listing the projects in a space.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProjectsInput {
    /// The name of the space to list projects in.
    #[serde(skip)]
    pub space_name: Option<String>,
    /// A token returned by a previous call, to fetch the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// The maximum number of results per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    #[serde(skip)]
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl ListProjectsInput {
    pub fn builder() -> ListProjectsInputBuilder {
        ListProjectsInputBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListProjectsInputBuilder {
    inner: ListProjectsInput,
}

impl ListProjectsInputBuilder {
    pub fn space_name(mut self, space_name: impl Into<String>) -> Self {
        self.inner.space_name = Some(space_name.into());
        self
    }

    pub fn next_token(mut self, next_token: impl Into<String>) -> Self {
        self.inner.next_token = Some(next_token.into());
        self
    }

    pub fn max_results(mut self, max_results: i32) -> Self {
        self.inner.max_results = Some(max_results);
        self
    }

    /// Per-request configuration overriding the client configuration.
    pub fn override_config(mut self, config: RequestOverrideConfig) -> Self {
        self.inner.override_config = Some(config);
        self
    }

    pub fn build(self) -> ListProjectsInput {
        self.inner
    }
}

/// Input for creating a Dev Environment.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateDevEnvironmentInput {
    /// The name of the space.
    #[serde(skip)]
    pub space_name: Option<String>,
    /// The name of the project within the space.
    #[serde(skip)]
    pub project_name: Option<String>,
    /// The source repositories to clone into the Dev Environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<RepositoryInput>>,
    /// A user-specified idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// A user-friendly alias for the Dev Environment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// The IDEs to configure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ides: Option<Vec<IdeConfiguration>>,
    /// The EC2 instance type to run the Dev Environment on.
    pub instance_type: Option<String>,
    /// Minutes of inactivity after which the Dev Environment stops.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactivity_timeout_minutes: Option<i32>,
    /// The amount of persistent storage to allocate.
    pub persistent_storage: Option<PersistentStorageConfiguration>,
    #[serde(skip)]
    pub(crate) override_config: Option<RequestOverrideConfig>,
}

impl CreateDevEnvironmentInput {
    pub fn builder() -> CreateDevEnvironmentInputBuilder {
        CreateDevEnvironmentInputBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct CreateDevEnvironmentInputBuilder {
    inner: CreateDevEnvironmentInput,
}

impl CreateDevEnvironmentInputBuilder {
    pub fn space_name(mut self, space_name: impl Into<String>) -> Self {
        self.inner.space_name = Some(space_name.into());
        self
    }

    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.inner.project_name = Some(project_name.into());
        self
    }

    pub fn repositories(mut self, repository: RepositoryInput) -> Self {
        self.inner
            .repositories
            .get_or_insert_with(Vec::new)
            .push(repository);
        self
    }

    pub fn client_token(mut self, client_token: impl Into<String>) -> Self {
        self.inner.client_token = Some(client_token.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.inner.alias = Some(alias.into());
        self
    }

    pub fn ides(mut self, ide: IdeConfiguration) -> Self {
        self.inner.ides.get_or_insert_with(Vec::new).push(ide);
        self
    }

    pub fn instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.inner.instance_type = Some(instance_type.into());
        self
    }

    pub fn inactivity_timeout_minutes(mut self, minutes: i32) -> Self {
        self.inner.inactivity_timeout_minutes = Some(minutes);
        self
    }

    pub fn persistent_storage(mut self, storage: PersistentStorageConfiguration) -> Self {
        self.inner.persistent_storage = Some(storage);
        self
    }

    /// Per-request configuration overriding the client configuration.
    pub fn override_config(mut self, config: RequestOverrideConfig) -> Self {
        self.inner.override_config = Some(config);
        self
    }

    pub fn build(self) -> CreateDevEnvironmentInput {
        self.inner
    }
}
