use std::{collections::BTreeMap, sync::Arc, time::Instant};

use axum::{
    Router,
    body::{Body, Bytes},
    extract::{Request, State},
    http::HeaderMap,
    middleware::{self, Next},
    response::Response,
};
use futures::{StreamExt, stream};
use tower_http::catch_panic::CatchPanicLayer;

use crate::request_log::domain::{
    model::commands::record_completed_request_command::RecordCompletedRequestCommand,
    services::request_record_command_service::RequestRecordCommandService,
};

/// Matches axum's default request body limit.
pub const DEFAULT_RECORDED_BODY_LIMIT: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct RequestInstrumentationState {
    pub command_service: Arc<dyn RequestRecordCommandService>,
    /// Bodies longer than this are forwarded untouched and stored as absent.
    pub body_limit: usize,
}

impl RequestInstrumentationState {
    pub fn new(command_service: Arc<dyn RequestRecordCommandService>) -> Self {
        Self {
            command_service,
            body_limit: DEFAULT_RECORDED_BODY_LIMIT,
        }
    }

    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }
}

/// Wraps every route of `router` so each exchange is recorded once. Handler
/// panics are turned into 500 responses first, so they are recorded too.
pub fn instrument(router: Router, state: RequestInstrumentationState) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn_with_state(state, record_request))
}

pub async fn record_request(
    State(state): State<RequestInstrumentationState>,
    request: Request,
    next: Next,
) -> Response {
    let started_at = Instant::now();

    let (parts, body) = request.into_parts();
    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();
    let headers = serialize_headers(&parts.headers);
    let (request_body, request_capture) = capture_body(body, state.body_limit, "request").await;

    let response = next
        .run(Request::from_parts(parts, request_body))
        .await;

    let (response_parts, response_body) = response.into_parts();
    let (response_body, response_capture) =
        capture_body(response_body, state.body_limit, "response").await;
    let duration_seconds = started_at.elapsed().as_secs_f64();
    let status = response_parts.status.as_u16();
    let response = Response::from_parts(response_parts, response_body);

    let (Some(request_text), Some(response_text)) =
        (request_capture.into_text(), response_capture.into_text())
    else {
        tracing::error!(method = %method, path = %path, status, "exchange not recorded: body stream failed");
        return response;
    };

    match RecordCompletedRequestCommand::new(
        method,
        path,
        request_text,
        headers,
        status,
        response_text,
        duration_seconds,
    ) {
        Ok(command) => persist(state.command_service, command).await,
        Err(error) => tracing::error!(error = %error, "request record rejected"),
    }

    response
}

enum BodyCapture {
    Complete(Bytes),
    Oversized,
    Failed,
}

impl BodyCapture {
    /// `None` when the exchange must not be recorded; `Some(None)` when the
    /// body is recorded as absent.
    fn into_text(self) -> Option<Option<String>> {
        match self {
            Self::Complete(bytes) if bytes.is_empty() => Some(None),
            Self::Complete(bytes) => Some(Some(String::from_utf8_lossy(&bytes).into_owned())),
            Self::Oversized => Some(None),
            Self::Failed => None,
        }
    }
}

/// Reads up to `limit` bytes. The returned body always replays exactly what
/// the original would have produced, including a trailing stream error.
async fn capture_body(body: Body, limit: usize, side: &'static str) -> (Body, BodyCapture) {
    let mut chunks = body.into_data_stream();
    let mut buffered: Vec<u8> = Vec::new();

    while let Some(chunk) = chunks.next().await {
        match chunk {
            Ok(chunk) if buffered.len() + chunk.len() > limit => {
                tracing::debug!(side, limit, "body over recording limit");
                let replay = stream::iter([Ok(Bytes::from(buffered)), Ok(chunk)]).chain(chunks);
                return (Body::from_stream(replay), BodyCapture::Oversized);
            }
            Ok(chunk) => buffered.extend_from_slice(&chunk),
            Err(error) => {
                tracing::error!(side, error = %error, "failed to buffer body");
                let replay = stream::iter([Ok(Bytes::from(buffered)), Err(error)]);
                return (Body::from_stream(replay), BodyCapture::Failed);
            }
        }
    }

    let bytes = Bytes::from(buffered);
    (Body::from(bytes.clone()), BodyCapture::Complete(bytes))
}

/// Runs the insert on its own task so it completes even when the caller's
/// connection goes away and this future is dropped. Failures stop here.
async fn persist(
    command_service: Arc<dyn RequestRecordCommandService>,
    command: RecordCompletedRequestCommand,
) {
    let method = command.method().to_string();
    let path = command.path().to_string();
    let status = command.response_status();

    let task = tokio::spawn(async move { command_service.handle_record(command).await });

    match task.await {
        Ok(Ok(_)) => {}
        Ok(Err(error)) => tracing::error!(
            method = %method,
            path = %path,
            status,
            error = %error,
            "failed to persist request record"
        ),
        Err(join_error) => tracing::error!(
            method = %method,
            path = %path,
            status,
            error = %join_error,
            "request record task did not complete"
        ),
    }
}

/// JSON object of header name to value; repeated names are joined with ", ".
fn serialize_headers(headers: &HeaderMap) -> Option<String> {
    if headers.is_empty() {
        return None;
    }

    let mut collected: BTreeMap<&str, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.as_str())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }

    serde_json::to_string(&collected).ok()
}
