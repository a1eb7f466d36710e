/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Output shapes for CodeCatalyst operations.

use crate::model::ProjectSummary;
use serde::Deserialize;
use std::fmt;

/// Output of creating a personal access token.
#[derive(Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct CreateAccessTokenOutput {
    /// The secret token value. Only ever returned at creation time.
    pub secret: Option<String>,
    /// The friendly name of the token.
    pub name: Option<String>,
    /// When the token expires, in RFC 3339 date-time format.
    pub expires_time: Option<String>,
    /// The system-generated id of the token.
    pub access_token_id: Option<String>,
}

// The secret must never leak through logs.
impl fmt::Debug for CreateAccessTokenOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateAccessTokenOutput")
            .field("secret", &"*** Sensitive Data Redacted ***")
            .field("name", &self.name)
            .field("expires_time", &self.expires_time)
            .field("access_token_id", &self.access_token_id)
            .finish()
    }
}

/// Output of deleting a personal access token. Deleting an unknown token id
/// succeeds with an empty response.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[non_exhaustive]
pub struct DeleteAccessTokenOutput {}

/// Output of describing a project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct GetProjectOutput {
    /// The name of the space the project belongs to.
    pub space_name: Option<String>,
    /// The name of the project.
    pub name: Option<String>,
    /// The friendly name displayed to users.
    pub display_name: Option<String>,
    /// The description of the project.
    pub description: Option<String>,
}

/// One page of projects.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct ListProjectsOutput {
    /// The projects in this page.
    pub items: Option<Vec<ProjectSummary>>,
    /// Present when more pages remain.
    pub next_token: Option<String>,
}

/// Output of creating a Dev Environment.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct CreateDevEnvironmentOutput {
    /// The name of the space.
    pub space_name: Option<String>,
    /// The name of the project.
    pub project_name: Option<String>,
    /// The system-generated id of the new Dev Environment.
    pub id: Option<String>,
}
