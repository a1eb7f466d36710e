/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes shared between operation inputs and outputs.

use serde::{Deserialize, Serialize};

/// Information about a project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct ProjectSummary {
    /// The name of the project in the space.
    pub name: Option<String>,
    /// The friendly name displayed to users of the project.
    pub display_name: Option<String>,
    /// The description of the project.
    pub description: Option<String>,
}

/// Information about an integrated development environment (IDE) for a Dev
/// Environment.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct IdeConfiguration {
    /// A link to the IDE runtime image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// The name of the IDE.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The amount of storage allocated to a Dev Environment.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[non_exhaustive]
pub struct PersistentStorageConfiguration {
    /// The size of the persistent storage in gibibytes.
    #[serde(rename = "sizeInGiB")]
    pub size_in_gib: i32,
}

impl PersistentStorageConfiguration {
    pub fn new(size_in_gib: i32) -> Self {
        Self { size_in_gib }
    }
}

/// A source repository to clone into a Dev Environment.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RepositoryInput {
    /// The name of the source repository.
    pub repository_name: String,
    /// The branch to check out, or the default branch when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
}

impl RepositoryInput {
    pub fn new(repository_name: impl Into<String>) -> Self {
        Self {
            repository_name: repository_name.into(),
            branch_name: None,
        }
    }

    pub fn branch_name(mut self, branch_name: impl Into<String>) -> Self {
        self.branch_name = Some(branch_name.into());
        self
    }
}
