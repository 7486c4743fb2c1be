// SPDX-License-Identifier: MIT

use axum::http::{Request, StatusCode};
use axum::{Router, routing::get};
use deploy_hooks::{
    AppState, Config, HookResponse, LifecycleStatus, Result, StatusReporter, create_router,
};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Records every orchestrator report instead of sending it
#[derive(Default)]
struct RecordingReporter {
    calls: Mutex<Vec<(String, String, LifecycleStatus)>>,
}

#[async_trait::async_trait]
impl StatusReporter for RecordingReporter {
    async fn put_lifecycle_status(
        &self,
        deployment_id: &str,
        execution_id: &str,
        status: LifecycleStatus,
    ) -> Result<()> {
        self.calls.lock().unwrap().push((
            deployment_id.to_string(),
            execution_id.to_string(),
            status,
        ));
        Ok(())
    }
}

fn make_state(config: Config, reporter: Arc<RecordingReporter>) -> Arc<AppState> {
    Arc::new(AppState {
        config,
        http: reqwest::Client::new(),
        reporter,
    })
}

fn hook_event() -> String {
    r#"{"DeploymentId":"d-TEST123","LifecycleEventHookExecutionId":"exec-1"}"#.to_string()
}

async fn read_body(resp: axum::response::Response) -> String {
    String::from_utf8(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec(),
    )
    .unwrap()
}

/// Spawns a throwaway HTTP server answering every request with `status`
async fn spawn_responder(status: StatusCode) -> String {
    let app = Router::new().route("/", get(move || async move { (status, "responder body") }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

/// Spawns a server that accepts connections but never answers them
async fn spawn_black_hole() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        loop {
            if let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        }
    });
    format!("http://{addr}/")
}

// --- /ping endpoint ---

#[tokio::test]
async fn ping_returns_200_with_cors_and_defaults() {
    let state = make_state(Config::default(), Arc::new(RecordingReporter::default()));
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/ping").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(
        resp.headers().get("access-control-allow-methods").unwrap(),
        "GET, OPTIONS"
    );

    let body: serde_json::Value = serde_json::from_str(&read_body(resp).await).unwrap();
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(body["environment"], "unknown");
    assert_eq!(body["requestId"], "local");
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn ping_echoes_request_id_header() {
    let state = make_state(Config::default(), Arc::new(RecordingReporter::default()));
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::get("/ping")
                .header("x-request-id", "req-abc-123")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&read_body(resp).await).unwrap();
    assert_eq!(body["requestId"], "req-abc-123");
}

#[tokio::test]
async fn ping_message_embeds_version_string() {
    let state = make_state(Config::default(), Arc::new(RecordingReporter::default()));
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/ping").body(String::new()).unwrap())
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&read_body(resp).await).unwrap();
    let message = body["message"].as_str().unwrap();
    let rest = message.strip_prefix("ping v").expect("message prefix");
    assert_eq!(rest.split('.').count(), 3);
    for part in rest.split('.') {
        part.parse::<u32>().expect("numeric version component");
    }
}

#[tokio::test]
async fn ping_reports_configured_version_and_stage() {
    let config = Config {
        app_version: "2.3.4".to_string(),
        stage: "prod".to_string(),
        ..Config::default()
    };
    let state = make_state(config, Arc::new(RecordingReporter::default()));
    let app = create_router(state);

    let resp = app
        .oneshot(Request::get("/ping").body(String::new()).unwrap())
        .await
        .unwrap();

    let body: serde_json::Value = serde_json::from_str(&read_body(resp).await).unwrap();
    assert_eq!(body["version"], "2.3.4");
    assert_eq!(body["environment"], "prod");
}

// --- /hooks/pre-traffic ---

#[tokio::test]
async fn pre_traffic_reports_succeeded_exactly_once() {
    let reporter = Arc::new(RecordingReporter::default());
    let state = make_state(Config::default(), reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/pre-traffic")
                .header("content-type", "application/json")
                .body(hook_event())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: HookResponse = serde_json::from_str(&read_body(resp).await).unwrap();
    assert_eq!(body.message, "Pre-traffic validation completed successfully");
    assert!(body.error.is_none());

    let calls = reporter.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        *calls,
        vec![(
            "d-TEST123".to_string(),
            "exec-1".to_string(),
            LifecycleStatus::Succeeded
        )]
    );
}

#[tokio::test]
async fn pre_traffic_rejects_malformed_event() {
    let reporter = Arc::new(RecordingReporter::default());
    let state = make_state(Config::default(), reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/pre-traffic")
                .header("content-type", "application/json")
                .body(r#"{"DeploymentId":"d-1"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
    assert!(reporter.calls.lock().unwrap().is_empty());
}

// --- /hooks/post-traffic ---

#[tokio::test]
async fn post_traffic_without_endpoint_skips_probe_and_succeeds() {
    let reporter = Arc::new(RecordingReporter::default());
    let state = make_state(Config::default(), reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/post-traffic")
                .header("content-type", "application/json")
                .body(hook_event())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let calls = reporter.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].2, LifecycleStatus::Succeeded);
}

#[tokio::test]
async fn post_traffic_succeeds_when_probe_returns_200() {
    let url = spawn_responder(StatusCode::OK).await;
    let reporter = Arc::new(RecordingReporter::default());
    let config = Config {
        endpoint_url: Some(url),
        ..Config::default()
    };
    let state = make_state(config, reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/post-traffic")
                .header("content-type", "application/json")
                .body(hook_event())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        reporter.calls.lock().unwrap()[0].2,
        LifecycleStatus::Succeeded
    );
}

#[tokio::test]
async fn post_traffic_fails_when_probe_returns_non_200() {
    let url = spawn_responder(StatusCode::SERVICE_UNAVAILABLE).await;
    let reporter = Arc::new(RecordingReporter::default());
    let config = Config {
        endpoint_url: Some(url),
        ..Config::default()
    };
    let state = make_state(config, reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/post-traffic")
                .header("content-type", "application/json")
                .body(hook_event())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: HookResponse = serde_json::from_str(&read_body(resp).await).unwrap();
    assert_eq!(body.message, "Post-traffic validation failed");
    assert!(!body.error.unwrap().is_empty());

    let calls = reporter.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].2, LifecycleStatus::Failed);
}

#[tokio::test]
async fn post_traffic_treats_probe_timeout_as_failure() {
    let url = spawn_black_hole().await;
    let reporter = Arc::new(RecordingReporter::default());
    let config = Config {
        endpoint_url: Some(url),
        probe_timeout: Duration::from_millis(200),
        ..Config::default()
    };
    let state = make_state(config, reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/post-traffic")
                .header("content-type", "application/json")
                .body(hook_event())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: HookResponse = serde_json::from_str(&read_body(resp).await).unwrap();
    assert!(body.error.unwrap().contains("timeout"));
    assert_eq!(reporter.calls.lock().unwrap()[0].2, LifecycleStatus::Failed);
}

#[tokio::test]
async fn post_traffic_fails_when_endpoint_is_unreachable() {
    // Nothing listens on this port; the probe sees a connection error
    let reporter = Arc::new(RecordingReporter::default());
    let config = Config {
        endpoint_url: Some("http://127.0.0.1:1/".to_string()),
        ..Config::default()
    };
    let state = make_state(config, reporter.clone());
    let app = create_router(state);

    let resp = app
        .oneshot(
            Request::post("/hooks/post-traffic")
                .header("content-type", "application/json")
                .body(hook_event())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reporter.calls.lock().unwrap()[0].2, LifecycleStatus::Failed);
}
