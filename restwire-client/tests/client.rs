/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Uri;
use restwire_client::config::RequestOverrideConfig;
use restwire_client::connector::ConnectorError;
use restwire_client::metrics::{
    CoreMetric, MetricPublisher, MetricSnapshot, MetricValue, SharedMetricPublisher,
};
use restwire_client::registry::{ErrorRegistry, ErrorRegistryBuilder};
use restwire_client::test_connection::{capture_request, NeverConnector, TestConnection};
use restwire_client::token::StaticTokenProvider;
use restwire_client::{Client, Connector, SdkError};
use restwire_http::error::{MarshalError, UnmarshalError};
use restwire_http::operation::{ApiOperation, Metadata};
use restwire_http::{HttpRequest, HttpResponse};
use restwire_types::ErrorMetadata;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A minimal operation: GET /v1/things/{name}, response body echoed back as
/// the output string.
#[derive(Debug)]
struct GetThing;

#[derive(Debug)]
struct GetThingInput {
    name: Option<String>,
}

impl ApiOperation for GetThing {
    type Input = GetThingInput;
    type Output = String;

    fn metadata(&self) -> Metadata {
        Metadata::new("GetThing", "ThingService")
    }

    fn marshal(&self, input: &Self::Input) -> Result<HttpRequest, MarshalError> {
        let name = input
            .name
            .as_deref()
            .ok_or_else(|| MarshalError::missing_field("name"))?;
        http::Request::builder()
            .method("GET")
            .uri(format!(
                "/v1/things/{}",
                restwire_http::label::fmt_string(name)
            ))
            .body(Bytes::new())
            .map_err(MarshalError::serialization)
    }

    fn unmarshal(&self, response: &HttpResponse) -> Result<Self::Output, UnmarshalError> {
        std::str::from_utf8(response.body())
            .map(|s| s.to_string())
            .map_err(UnmarshalError::new)
    }
}

#[derive(Debug, PartialEq)]
enum ThingError {
    NotFound { message: Option<String> },
    Unhandled { code: Option<String>, status: u16 },
}

fn thing_registry() -> ErrorRegistry<ThingError> {
    ErrorRegistryBuilder::new(|meta: ErrorMetadata, status| ThingError::Unhandled {
        code: meta.code().map(str::to_string),
        status,
    })
    .register("ResourceNotFoundException", 404, |meta, _status| {
        ThingError::NotFound {
            message: meta.message().map(str::to_string),
        }
    })
    .build()
}

#[derive(Debug, Default)]
struct RecordingPublisher {
    snapshots: Mutex<Vec<MetricSnapshot>>,
}

impl RecordingPublisher {
    fn snapshots(&self) -> Vec<MetricSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }
}

impl MetricPublisher for RecordingPublisher {
    fn publish(&self, snapshot: &MetricSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot.clone());
    }
}

fn client_with<C: Connector>(
    connector: C,
    publisher: Option<SharedMetricPublisher>,
) -> Client<C, ThingError> {
    let mut builder = Client::builder()
        .connector(connector)
        .endpoint(Uri::from_static("https://thing.example.com"))
        .token_provider(StaticTokenProvider::new("test-token"))
        .error_registry(thing_registry());
    if let Some(publisher) = publisher {
        builder = builder.metric_publisher(publisher);
    }
    builder.build()
}

fn input(name: &str) -> GetThingInput {
    GetThingInput {
        name: Some(name.to_string()),
    }
}

fn response(status: u16, body: &'static str) -> HttpResponse {
    http::Response::builder()
        .status(status)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap()
}

#[tokio::test]
async fn successful_call_publishes_one_snapshot() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri("https://thing.example.com/v1/things/widget")
            .body(Bytes::new())
            .unwrap(),
        response(200, "widget-body"),
    )]);
    let publisher = Arc::new(RecordingPublisher::default());
    let client = client_with(conn.clone(), Some(publisher.clone()));

    let output = client.call(&GetThing, input("widget")).await.unwrap();
    assert_eq!(output, "widget-body");
    conn.assert_requests_match(&[
        http::header::AUTHORIZATION,
        http::header::USER_AGENT,
    ]);

    let snapshots = publisher.snapshots();
    assert_eq!(snapshots.len(), 1);
    let snapshot = &snapshots[0];
    assert_eq!(snapshot.scope(), "ApiCall");
    assert_eq!(
        snapshot.get(CoreMetric::SERVICE_ID),
        Some(&MetricValue::String("ThingService".into()))
    );
    assert_eq!(
        snapshot.get(CoreMetric::OPERATION_NAME),
        Some(&MetricValue::String("GetThing".into()))
    );
    assert_eq!(
        snapshot.get(CoreMetric::API_CALL_SUCCESSFUL),
        Some(&MetricValue::Flag(true))
    );
    assert!(matches!(
        snapshot.get(CoreMetric::API_CALL_DURATION),
        Some(MetricValue::Duration(_))
    ));
    assert_eq!(snapshot.get(CoreMetric::ERROR_TYPE), None);
}

#[tokio::test]
async fn modeled_error_resolves_through_registry() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        response(
            404,
            r#"{"__type":"ResourceNotFoundException","message":"no such thing"}"#,
        ),
    )]);
    let publisher = Arc::new(RecordingPublisher::default());
    let client = client_with(conn, Some(publisher.clone()));

    let err = client.call(&GetThing, input("widget")).await.unwrap_err();
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(
                err,
                ThingError::NotFound {
                    message: Some("no such thing".to_string())
                }
            );
            assert_eq!(raw.status().as_u16(), 404);
        }
        other => panic!("expected service error, got {:?}", other),
    }

    let snapshots = publisher.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(
        snapshots[0].get(CoreMetric::API_CALL_SUCCESSFUL),
        Some(&MetricValue::Flag(false))
    );
    assert_eq!(
        snapshots[0].get(CoreMetric::ERROR_TYPE),
        Some(&MetricValue::String("service".into()))
    );
}

#[tokio::test]
async fn unknown_error_code_falls_back() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        response(500, r#"{"__type":"MeteorStrikeException"}"#),
    )]);
    let client = client_with(conn, None);

    let err = client.call(&GetThing, input("widget")).await.unwrap_err();
    match err {
        SdkError::ServiceError { err, .. } => assert_eq!(
            err,
            ThingError::Unhandled {
                code: Some("MeteorStrikeException".to_string()),
                status: 500,
            }
        ),
        other => panic!("expected service error, got {:?}", other),
    }
}

#[tokio::test]
async fn marshal_failure_still_publishes_metrics() {
    let conn = TestConnection::new(vec![]);
    let publisher = Arc::new(RecordingPublisher::default());
    let client = client_with(conn.clone(), Some(publisher.clone()));

    let err = client
        .call(&GetThing, GetThingInput { name: None })
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());

    let snapshots = publisher.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(
        snapshots[0].get(CoreMetric::OPERATION_NAME),
        Some(&MetricValue::String("GetThing".into()))
    );
    assert_eq!(
        snapshots[0].get(CoreMetric::ERROR_TYPE),
        Some(&MetricValue::String("construction".into()))
    );
}

#[tokio::test]
async fn no_publishers_means_no_publishing() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        response(200, "ok"),
    )]);
    let client = client_with(conn, None);
    // Nothing observable beyond the call succeeding; the no-op collector is
    // covered by unit tests. This pins down that publishing is optional.
    client.call(&GetThing, input("widget")).await.unwrap();
}

#[tokio::test]
async fn override_publishers_replace_client_publishers() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        response(200, "ok"),
    )]);
    let client_publisher = Arc::new(RecordingPublisher::default());
    let override_publisher = Arc::new(RecordingPublisher::default());
    let client = client_with(conn, Some(client_publisher.clone()));

    let config = RequestOverrideConfig::builder()
        .metric_publisher(override_publisher.clone())
        .build();
    client
        .call_with_config(&GetThing, input("widget"), Some(config))
        .await
        .unwrap();

    assert!(client_publisher.snapshots().is_empty());
    assert_eq!(override_publisher.snapshots().len(), 1);
}

#[tokio::test]
async fn malformed_success_body_is_a_response_error() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(Bytes::new()).unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(&[0xff, 0xfe]))
            .unwrap(),
    )]);
    let client = client_with(conn, None);

    let err = client.call(&GetThing, input("widget")).await.unwrap_err();
    match err {
        SdkError::ResponseError { raw, .. } => assert_eq!(raw.status().as_u16(), 200),
        other => panic!("expected response error, got {:?}", other),
    }
}

#[tokio::test]
async fn closed_client_fails_fast_and_still_publishes() {
    let conn = TestConnection::new(vec![]);
    let publisher = Arc::new(RecordingPublisher::default());
    let client = client_with(conn.clone(), Some(publisher.clone()));

    client.close();
    assert!(client.is_closed());

    let err = client.call(&GetThing, input("widget")).await.unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)));
    assert!(conn.requests().is_empty());
    assert_eq!(publisher.snapshots().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn api_call_timeout_surfaces_as_dispatch_failure() {
    let client = client_with(NeverConnector::new(), None);

    let config = RequestOverrideConfig::builder()
        .api_call_timeout(Duration::from_secs(2))
        .build();
    let err = client
        .call_with_config(&GetThing, input("widget"), Some(config))
        .await
        .unwrap_err();
    match err {
        SdkError::DispatchFailure(source) => {
            let connector_err = source
                .downcast::<ConnectorError>()
                .expect("timeout maps to a connector error");
            assert!(connector_err.is_timeout());
        }
        other => panic!("expected dispatch failure, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn dropping_the_call_future_cancels_the_call() {
    let publisher = Arc::new(RecordingPublisher::default());
    let client = client_with(NeverConnector::new(), Some(publisher.clone()));

    let input = input("widget");
    let call = client.call(&GetThing, input);
    // The connector never resolves, so the outer timeout fires and drops the
    // in-flight call.
    let raced = tokio::time::timeout(Duration::from_secs(1), call).await;
    assert!(raced.is_err());

    // A cancelled call never completed, so nothing was published.
    assert!(publisher.snapshots().is_empty());
}

#[tokio::test]
async fn bearer_token_and_user_agent_are_attached() {
    let (conn, rx) = capture_request(Some(response(200, "ok")));
    let client = Client::builder()
        .connector(conn)
        .endpoint(Uri::from_static("https://thing.example.com"))
        .token_provider(StaticTokenProvider::new("super-secret"))
        .error_registry(thing_registry())
        .app_name("thing-cli")
        .build();

    let _: Result<String, SdkError<ThingError>> = client.call(&GetThing, input("a b")).await;

    let request = rx.expect_request();
    assert_eq!(
        request.uri().to_string(),
        "https://thing.example.com/v1/things/a%20b"
    );
    let auth = request.headers().get(http::header::AUTHORIZATION).unwrap();
    assert_eq!(auth.to_str().unwrap(), "Bearer super-secret");
    assert!(auth.is_sensitive());
    let user_agent = request.headers().get(http::header::USER_AGENT).unwrap();
    assert!(user_agent.to_str().unwrap().starts_with("restwire/"));
    assert!(user_agent.to_str().unwrap().ends_with(" app/thing-cli"));
}

#[tokio::test]
async fn concurrent_calls_pair_requests_with_responses() {
    let conn = TestConnection::new(vec![
        (
            http::Request::builder().body(Bytes::new()).unwrap(),
            response(200, "first"),
        ),
        (
            http::Request::builder().body(Bytes::new()).unwrap(),
            response(200, "second"),
        ),
    ]);
    let client = client_with(conn, None);

    let (first, second) = tokio::join!(
        client.call(&GetThing, input("one")),
        client.call(&GetThing, input("two")),
    );
    let mut outputs = vec![first.unwrap(), second.unwrap()];
    outputs.sort();
    assert_eq!(outputs, vec!["first".to_string(), "second".to_string()]);
}
