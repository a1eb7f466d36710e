/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use codecatalyst::input::{
    CreateAccessTokenInput, CreateDevEnvironmentInput, DeleteAccessTokenInput, GetProjectInput,
    ListProjectsInput,
};
use codecatalyst::model::{PersistentStorageConfiguration, RepositoryInput};
use codecatalyst::{Client, Config, Error, SdkError};
use http::Uri;
use restwire_client::test_connection::{capture_request, TestConnection};
use restwire_types::ProvideErrorMetadata;

fn config() -> Config {
    Config::builder().access_token("pat-test-token").build()
}

fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[tokio::test]
async fn get_project() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri(Uri::from_static(
                "https://codecatalyst.global.api.aws/v1/spaces/my-space/projects/my-project",
            ))
            .body(Bytes::new())
            .unwrap(),
        response(
            200,
            r#"{"spaceName":"my-space","name":"my-project","displayName":"My Project"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());

    let project = client
        .get_project(
            GetProjectInput::builder()
                .space_name("my-space")
                .name("my-project")
                .build(),
        )
        .await
        .expect("request should succeed");

    assert_eq!(project.name.as_deref(), Some("my-project"));
    assert_eq!(project.display_name.as_deref(), Some("My Project"));
    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[http::header::AUTHORIZATION, http::header::USER_AGENT]);
}

#[tokio::test]
async fn list_projects_pages_carry_the_token() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri(Uri::from_static(
                "https://codecatalyst.global.api.aws/v1/spaces/my-space/projects",
            ))
            .body(Bytes::from_static(
                br#"{"nextToken":"page-2","maxResults":5}"#,
            ))
            .unwrap(),
        response(
            200,
            r#"{"items":[{"name":"alpha"},{"name":"beta"}],"nextToken":"page-3"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), conn.clone());

    let page = client
        .list_projects(
            ListProjectsInput::builder()
                .space_name("my-space")
                .next_token("page-2")
                .max_results(5)
                .build(),
        )
        .await
        .expect("request should succeed");

    let items = page.items.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("alpha"));
    assert_eq!(page.next_token.as_deref(), Some("page-3"));
    conn.assert_requests_match(&[
        http::header::AUTHORIZATION,
        http::header::USER_AGENT,
        http::header::CONTENT_TYPE,
    ]);
}

#[tokio::test]
async fn get_project_modeled_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        response(
            404,
            r#"{"__type":"ResourceNotFoundException","message":"Project not found"}"#,
        ),
    )]);
    let client = Client::from_conf_conn(config(), conn);

    let err = client
        .get_project(
            GetProjectInput::builder()
                .space_name("my-space")
                .name("missing")
                .build(),
        )
        .await
        .expect_err("project doesn't exist");

    let inner = match err {
        SdkError::ServiceError {
            err: Error::ResourceNotFoundException(e),
            ..
        } => e,
        other => panic!("incorrect error received: {:?}", other),
    };
    assert_eq!(inner.message(), Some("Project not found"));
    assert_eq!(inner.status(), 404);
}

#[tokio::test]
async fn error_type_header_beats_the_body() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        http::Response::builder()
            .status(429)
            .header(
                "x-amzn-errortype",
                "ThrottlingException:http://internal.amazon.com/coral/",
            )
            .header("x-amzn-requestid", "0c59a034-ca38-44f2-a1ea-f6a3a6aaFAKE")
            .body(Bytes::from_static(br#"{"message":"Slow down"}"#))
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(config(), conn);

    let err = client
        .delete_access_token(DeleteAccessTokenInput::builder().id("pat-1").build())
        .await
        .expect_err("throttled");

    match err {
        SdkError::ServiceError {
            err: Error::ThrottlingException(e),
            ..
        } => {
            assert_eq!(e.message(), Some("Slow down"));
            assert_eq!(
                e.meta().request_id(),
                Some("0c59a034-ca38-44f2-a1ea-f6a3a6aaFAKE")
            );
        }
        other => panic!("incorrect error received: {:?}", other),
    }
}

#[tokio::test]
async fn unknown_error_code_is_preserved() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        response(500, r#"{"__type":"MeteorStrikeException","message":"boom"}"#),
    )]);
    let client = Client::from_conf_conn(config(), conn);

    let err = client
        .get_project(
            GetProjectInput::builder()
                .space_name("sp")
                .name("proj")
                .build(),
        )
        .await
        .expect_err("server error");

    match err {
        SdkError::ServiceError {
            err: Error::Unhandled(e),
            ..
        } => {
            assert_eq!(e.code(), Some("MeteorStrikeException"));
            assert_eq!(e.message(), Some("boom"));
            assert_eq!(e.status(), 500);
        }
        other => panic!("incorrect error received: {:?}", other),
    }
}

#[tokio::test]
async fn malformed_response_is_not_a_panic() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        // last `}` replaced with a space
        response(200, r#"{"spaceName":"my-space","name":"my-project" "#),
    )]);
    let client = Client::from_conf_conn(config(), conn);

    let err = client
        .get_project(
            GetProjectInput::builder()
                .space_name("my-space")
                .name("my-project")
                .build(),
        )
        .await
        .expect_err("response was malformed");
    assert!(matches!(err, SdkError::ResponseError { .. }));
}

#[tokio::test]
async fn create_access_token_sends_bearer_auth_and_redacts_the_secret() {
    let (conn, rx) = capture_request(Some(response(
        200,
        r#"{"secret":"pat-secret-value","name":"ci-token","accessTokenId":"id-123"}"#,
    )));
    let client = Client::from_conf_conn(config(), conn);

    let output = client
        .create_access_token(CreateAccessTokenInput::builder().name("ci-token").build())
        .await
        .expect("request should succeed");

    let request = rx.expect_request();
    assert_eq!(request.method(), "PUT");
    assert_eq!(
        request.uri().to_string(),
        "https://codecatalyst.global.api.aws/v1/accessTokens"
    );
    let auth = request.headers().get(http::header::AUTHORIZATION).unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer pat-test-token");
    assert!(auth.is_sensitive());
    let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
    assert_eq!(body, serde_json::json!({"name": "ci-token"}));

    assert_eq!(output.secret.as_deref(), Some("pat-secret-value"));
    let rendered = format!("{:?}", output);
    assert!(!rendered.contains("pat-secret-value"));
    assert!(rendered.contains("ci-token"));
}

#[tokio::test]
async fn create_dev_environment_round_trip() {
    let (conn, rx) = capture_request(Some(response(
        200,
        r#"{"spaceName":"sp","projectName":"proj","id":"env-42"}"#,
    )));
    let client = Client::from_conf_conn(config(), conn);

    let output = client
        .create_dev_environment(
            CreateDevEnvironmentInput::builder()
                .space_name("sp")
                .project_name("proj")
                .instance_type("dev.standard1.small")
                .persistent_storage(PersistentStorageConfiguration::new(16))
                .repositories(RepositoryInput::new("backend").branch_name("main"))
                .alias("backend-dev")
                .inactivity_timeout_minutes(30)
                .build(),
        )
        .await
        .expect("request should succeed");

    let request = rx.expect_request();
    assert_eq!(
        request.uri().path(),
        "/v1/spaces/sp/projects/proj/devEnvironments"
    );
    let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "repositories": [{"repositoryName": "backend", "branchName": "main"}],
            "alias": "backend-dev",
            "instanceType": "dev.standard1.small",
            "inactivityTimeoutMinutes": 30,
            "persistentStorage": {"sizeInGiB": 16}
        })
    );
    assert_eq!(output.id.as_deref(), Some("env-42"));
}

#[tokio::test]
async fn marshalling_rejects_missing_required_members() {
    let conn = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(config(), conn.clone());

    let err = client
        .get_project(GetProjectInput::builder().space_name("sp").build())
        .await
        .expect_err("name is required");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn closed_client_rejects_new_calls() {
    let conn = TestConnection::new(vec![]);
    let client = Client::from_conf_conn(config(), conn);

    client.close();
    let err = client
        .delete_access_token(DeleteAccessTokenInput::builder().id("pat-1").build())
        .await
        .expect_err("client is closed");
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
}
