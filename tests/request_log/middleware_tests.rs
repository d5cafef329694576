use axum::{body::to_bytes, http::StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::support::{
    create_instrumented_harness, create_instrumented_harness_with_limit, get, post_json,
    read_text, sample_routes, streaming_request,
};

#[tokio::test]
async fn records_one_entry_per_exchange() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let response = harness
        .router
        .clone()
        .oneshot(post_json("/echo", r#"{"ping":1}"#))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_text(response).await;
    assert_eq!(body, r#"{"echo":{"ping":1}}"#);

    let records = harness.repository.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.method(), "POST");
    assert_eq!(record.path(), "/echo");
    assert_eq!(record.body(), Some(r#"{"ping":1}"#));
    assert_eq!(record.response_status(), 200);
    assert_eq!(record.response_body(), Some(body.as_str()));
    assert!(record.duration().seconds() >= 0.0);

    let headers: Value =
        serde_json::from_str(record.headers().expect("headers recorded")).expect("json headers");
    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["x-trace"], "one, two");
}

#[tokio::test]
async fn response_reaches_the_client_unchanged() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let response = harness
        .router
        .clone()
        .oneshot(get("/created"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.headers()["x-handler"], "kept");
    assert_eq!(read_text(response).await, "created body");

    let records = harness.repository.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].response_status(), 201);
    assert_eq!(records[0].body(), None);
    assert_eq!(records[0].response_body(), Some("created body"));
}

#[tokio::test]
async fn store_failure_does_not_change_the_response() {
    let harness = create_instrumented_harness(sample_routes(), true);

    let response = harness
        .router
        .clone()
        .oneshot(get("/created"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_text(response).await, "created body");
    assert_eq!(harness.repository.insert_calls(), 1);
    assert!(harness.repository.records().is_empty());
}

#[tokio::test]
async fn unmatched_routes_are_recorded_with_their_status() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let response = harness
        .router
        .clone()
        .oneshot(get("/nowhere"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let records = harness.repository.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path(), "/nowhere");
    assert_eq!(records[0].response_status(), 404);
}

#[tokio::test]
async fn handler_panics_are_recorded_as_server_errors() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let response = harness
        .router
        .clone()
        .oneshot(get("/boom"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let records = harness.repository.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path(), "/boom");
    assert_eq!(records[0].response_status(), 500);
}

#[tokio::test]
async fn concurrent_requests_get_separate_records() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let calls = (0..8).map(|index| {
        let router = harness.router.clone();
        async move {
            router
                .oneshot(post_json("/echo", &format!(r#"{{"n":{index}}}"#)))
                .await
                .expect("response")
        }
    });
    let responses = futures_join_all(calls).await;
    assert!(responses.iter().all(|response| response.status() == StatusCode::OK));

    let records = harness.repository.records();
    assert_eq!(records.len(), 8);
    let mut ids: Vec<_> = records.iter().map(|record| record.id().value()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    let mut bodies: Vec<_> = records
        .iter()
        .map(|record| record.body().expect("body").to_string())
        .collect();
    bodies.sort();
    let mut expected: Vec<_> = (0..8).map(|index| format!(r#"{{"n":{index}}}"#)).collect();
    expected.sort();
    assert_eq!(bodies, expected);
}

#[tokio::test]
async fn failing_response_stream_reaches_the_client_as_a_failure() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let response = harness
        .router
        .clone()
        .oneshot(get("/broken"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(to_bytes(response.into_body(), usize::MAX).await.is_err());
    assert_eq!(harness.repository.insert_calls(), 0);
}

#[tokio::test]
async fn failing_request_stream_reaches_the_handler_as_a_failure() {
    let harness = create_instrumented_harness(sample_routes(), false);

    let response = harness
        .router
        .clone()
        .oneshot(streaming_request("/consume"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(harness.repository.insert_calls(), 0);
}

#[tokio::test]
async fn bodies_over_the_limit_are_forwarded_but_not_stored() {
    let harness = create_instrumented_harness_with_limit(sample_routes(), false, 16);
    let payload = format!(r#"{{"text":"{}"}}"#, "x".repeat(64));

    let response = harness
        .router
        .clone()
        .oneshot(post_json("/echo", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let echoed: Value = serde_json::from_str(&read_text(response).await).expect("json");
    assert_eq!(echoed["echo"]["text"].as_str().map(str::len), Some(64));

    let records = harness.repository.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body(), None);
    assert_eq!(records[0].response_body(), None);
    assert_eq!(records[0].response_status(), 200);
}

#[tokio::test]
async fn request_rejected_for_size_keeps_its_body_out_of_the_record() {
    let harness = create_instrumented_harness(sample_routes(), false);
    let payload = format!(r#"{{"text":"{}"}}"#, "x".repeat(3 * 1024 * 1024));

    let response = harness
        .router
        .clone()
        .oneshot(post_json("/echo", &payload))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let records = harness.repository.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].body(), None);
    assert_eq!(records[0].response_status(), 413);
}

async fn futures_join_all<F>(futures: impl Iterator<Item = F>) -> Vec<F::Output>
where
    F: std::future::Future + Send + 'static,
    F::Output: Send + 'static,
{
    let handles: Vec<_> = futures.map(tokio::spawn).collect();
    let mut outputs = Vec::with_capacity(handles.len());
    for handle in handles {
        outputs.push(handle.await.expect("task completed"));
    }
    outputs
}
