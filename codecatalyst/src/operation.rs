/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One descriptor per CodeCatalyst operation: its name, its wire request and
//! how its reply parses back into a typed output.

use crate::input::{
    CreateAccessTokenInput, CreateDevEnvironmentInput, DeleteAccessTokenInput, GetProjectInput,
    ListProjectsInput,
};
use crate::output::{
    CreateAccessTokenOutput, CreateDevEnvironmentOutput, DeleteAccessTokenOutput, GetProjectOutput,
    ListProjectsOutput,
};
use bytes::Bytes;
use restwire_http::error::{MarshalError, UnmarshalError};
use restwire_http::label::fmt_string;
use restwire_http::operation::{ApiOperation, Metadata};
use restwire_http::{HttpRequest, HttpResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

const SERVICE_ID: &str = "CodeCatalyst";

fn request(method: &str, uri: String, body: Bytes) -> Result<HttpRequest, MarshalError> {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .map_err(MarshalError::serialization)
}

fn json_body(input: &impl Serialize) -> Result<Bytes, MarshalError> {
    serde_json::to_vec(input)
        .map(Bytes::from)
        .map_err(MarshalError::serialization)
}

fn parse_json<T: DeserializeOwned + Default>(
    response: &HttpResponse,
) -> Result<T, UnmarshalError> {
    // Some operations reply with an empty body; treat it as the all-unset shape.
    if response.body().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(response.body()).map_err(UnmarshalError::new)
}

fn require<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, MarshalError> {
    value
        .as_deref()
        .ok_or_else(|| MarshalError::missing_field(field))
}

/// Creates a personal access token for the calling user.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CreateAccessToken;

impl ApiOperation for CreateAccessToken {
    type Input = CreateAccessTokenInput;
    type Output = CreateAccessTokenOutput;

    fn metadata(&self) -> Metadata {
        Metadata::new("CreateAccessToken", SERVICE_ID)
    }

    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError> {
        require("name", &input.name)?;
        request("PUT", "/v1/accessTokens".to_string(), json_body(input)?)
    }

    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError> {
        parse_json(response)
    }
}

/// Deletes a personal access token. Succeeds even if the id is unknown.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct DeleteAccessToken;

impl ApiOperation for DeleteAccessToken {
    type Input = DeleteAccessTokenInput;
    type Output = DeleteAccessTokenOutput;

    fn metadata(&self) -> Metadata {
        Metadata::new("DeleteAccessToken", SERVICE_ID)
    }

    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError> {
        let id = require("id", &input.id)?;
        request(
            "DELETE",
            format!("/v1/accessTokens/{}", fmt_string(id)),
            Bytes::new(),
        )
    }

    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError> {
        parse_json(response)
    }
}

/// Describes one project in a space.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetProject;

impl ApiOperation for GetProject {
    type Input = GetProjectInput;
    type Output = GetProjectOutput;

    fn metadata(&self) -> Metadata {
        Metadata::new("GetProject", SERVICE_ID)
    }

    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError> {
        let space_name = require("spaceName", &input.space_name)?;
        let name = require("name", &input.name)?;
        request(
            "GET",
            format!(
                "/v1/spaces/{}/projects/{}",
                fmt_string(space_name),
                fmt_string(name)
            ),
            Bytes::new(),
        )
    }

    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError> {
        parse_json(response)
    }
}

/// Lists the projects in a space, one page at a time.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListProjects;

impl ApiOperation for ListProjects {
    type Input = ListProjectsInput;
    type Output = ListProjectsOutput;

    fn metadata(&self) -> Metadata {
        Metadata::new("ListProjects", SERVICE_ID)
    }

    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError> {
        let space_name = require("spaceName", &input.space_name)?;
        request(
            "POST",
            format!("/v1/spaces/{}/projects", fmt_string(space_name)),
            json_body(input)?,
        )
    }

    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError> {
        parse_json(response)
    }
}

/// Creates a Dev Environment in a project.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CreateDevEnvironment;

impl ApiOperation for CreateDevEnvironment {
    type Input = CreateDevEnvironmentInput;
    type Output = CreateDevEnvironmentOutput;

    fn metadata(&self) -> Metadata {
        Metadata::new("CreateDevEnvironment", SERVICE_ID)
    }

    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError> {
        let space_name = require("spaceName", &input.space_name)?;
        let project_name = require("projectName", &input.project_name)?;
        require("instanceType", &input.instance_type)?;
        if input.persistent_storage.is_none() {
            return Err(MarshalError::missing_field("persistentStorage"));
        }
        request(
            "PUT",
            format!(
                "/v1/spaces/{}/projects/{}/devEnvironments",
                fmt_string(space_name),
                fmt_string(project_name)
            ),
            json_body(input)?,
        )
    }

    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError> {
        parse_json(response)
    }
}
