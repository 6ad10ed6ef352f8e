use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::task::JoinHandle;

/// Reserve a free localhost port.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Serve /v1/health on `port`, answering every probe with `status`.
///
/// The listener is bound before the task is spawned, so the server accepts
/// connections as soon as this returns.
async fn spawn_health_server(port: u16, status: StatusCode) -> JoinHandle<()> {
    let app = Router::new().route("/v1/health", get(move || async move { (status, "") }));
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}"))
        .await
        .unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    })
}

#[tokio::test]
async fn test_probe_succeeds_against_healthy_server() {
    let port = free_port();
    let server = spawn_health_server(port, StatusCode::OK).await;

    let result = linesink::healthcheck_with_port(port).await;
    assert!(result.is_ok(), "probe against a 200 endpoint: {result:?}");

    server.abort();
}

#[tokio::test]
async fn test_probe_fails_with_no_server() {
    let port = free_port();

    let result = linesink::healthcheck_with_port(port).await;
    assert!(result.is_err(), "probe with nothing listening must fail");
}

#[tokio::test]
async fn test_probe_fails_on_unhealthy_status() {
    let port = free_port();
    let server = spawn_health_server(port, StatusCode::SERVICE_UNAVAILABLE).await;

    let result = linesink::healthcheck_with_port(port).await;
    assert!(result.is_err(), "probe against a 503 endpoint must fail");

    server.abort();
}
