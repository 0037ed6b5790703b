#![cfg(test)]
// Backend integration tests against a local one-shot HTTP responder.
// - Serves a canned response on 127.0.0.1 and records the request line.
// - Drives NewsClient, applies the outcome to AppState and renders with TestBackend.

use std::time::Duration;

use newsdeck::logic::apply_load_outcome;
use newsdeck::sources::{NewsClient, NewsError, StreamOutcome, pump_events};
use newsdeck::state::{AppState, LoadEndpoint, LoadRequest, LoadTrigger, UiState};
use ratatui::{Terminal, backend::TestBackend};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// What: Serve exactly one HTTP response on an ephemeral port.
///
/// Inputs:
/// - `status`: Status line suffix, e.g. `200 OK`
/// - `content_type`: Response content type
/// - `body`: Response body, sent before the connection is closed
///
/// Output:
/// - Base URL of the responder and a handle resolving to the request line it received.
async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: String,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let (mut sock, _) = listener.accept().await.expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = sock.read(&mut chunk).await.expect("read request");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let request = String::from_utf8_lossy(&buf).to_string();
        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nConnection: close\r\n\r\n"
        );
        sock.write_all(head.as_bytes()).await.expect("write head");
        sock.write_all(body.as_bytes()).await.expect("write body");
        sock.shutdown().await.expect("shutdown");
        request.lines().next().unwrap_or_default().to_string()
    });
    (format!("http://{addr}"), handle)
}

fn request(endpoint: LoadEndpoint) -> LoadRequest {
    LoadRequest {
        endpoint,
        silent: false,
        trigger: LoadTrigger::Startup,
    }
}

fn render(app: &mut AppState) -> String {
    let backend = TestBackend::new(120, 30);
    let mut term = Terminal::new(backend).expect("terminal");
    term.draw(|f| newsdeck::ui::ui(f, app)).expect("draw");
    let buf = term.backend().buffer().clone();
    let width = usize::from(buf.area.width);
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
/// What: A successful `/api/news` response ends up on screen.
///
/// Inputs:
/// - One article and an RFC 3339 `timestamp`.
///
/// Output:
/// - `GET /api/news`, `Loaded` state, card title and category rendered and the label
///   shown in local time.
async fn news_load_renders_card_and_update_label() {
    let body = r#"{"success":true,"data":[{"title":"A","category":"tech","summary":"s","time":"t"}],"timestamp":"2024-01-01T00:00:00Z"}"#;
    let (base, server) = serve_once("200 OK", "application/json", body.to_string()).await;
    let client = NewsClient::new(&base).expect("client");

    let outcome = client.fetch(LoadEndpoint::News).await;
    let request_line = server.await.expect("responder");
    assert!(request_line.starts_with("GET /api/news "), "{request_line}");

    let mut app = AppState::default();
    apply_load_outcome(&mut app, request(LoadEndpoint::News), outcome);
    assert_eq!(app.ui_state, UiState::Loaded);
    assert_eq!(app.articles.len(), 1);

    let expected_label = newsdeck::util::format_update_time(
        Some("2024-01-01T00:00:00Z"),
        chrono::Local::now(),
    );
    let text = render(&mut app);
    assert!(text.contains(&expected_label), "label missing:\n{text}");
    assert!(text.contains("tech"));
    assert!(!text.contains("Unknown source"), "cards omit a missing source");
    assert_eq!(app.card_rects.len(), 1);
}

#[tokio::test]
/// What: `success:false` on an error status surfaces the server's message.
async fn refresh_failure_shows_server_message() {
    let (base, server) = serve_once(
        "500 Internal Server Error",
        "application/json",
        r#"{"success":false,"error":"boom"}"#.to_string(),
    )
    .await;
    let client = NewsClient::new(&base).expect("client");

    let outcome = client.fetch(LoadEndpoint::Refresh).await;
    let request_line = server.await.expect("responder");
    assert!(request_line.starts_with("GET /api/refresh "), "{request_line}");
    assert!(matches!(&outcome, Err(NewsError::Application(m)) if m == "boom"));

    let mut app = AppState::default();
    apply_load_outcome(&mut app, request(LoadEndpoint::Refresh), outcome);
    assert_eq!(app.ui_state, UiState::Error("boom".into()));
    let text = render(&mut app);
    assert!(text.contains("boom"), "error banner missing:\n{text}");
}

#[tokio::test]
/// What: An error status with a non-JSON body reports the status code.
async fn error_status_without_json_reports_status() {
    let (base, _server) =
        serve_once("502 Bad Gateway", "text/html", "<html>down</html>".to_string()).await;
    let client = NewsClient::new(&base).expect("client");
    let err = client
        .fetch(LoadEndpoint::News)
        .await
        .expect_err("must fail");
    assert_eq!(err.to_string(), "Server returned HTTP 502");
}

#[tokio::test]
/// What: A 200 response whose body is not JSON is a decode failure.
async fn ok_status_with_garbage_is_decode_error() {
    let (base, _server) = serve_once("200 OK", "application/json", "nope".to_string()).await;
    let client = NewsClient::new(&base).expect("client");
    let err = client
        .fetch(LoadEndpoint::News)
        .await
        .expect_err("must fail");
    assert!(matches!(err, NewsError::Decode(_)));
}

#[tokio::test]
/// What: A refused connection is a network error, not a panic.
async fn unreachable_backend_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    let client = NewsClient::new(&format!("http://{addr}/")).expect("client");
    let err = client
        .fetch(LoadEndpoint::News)
        .await
        .expect_err("must fail");
    assert!(matches!(err, NewsError::Network(_)));
}

#[tokio::test]
/// What: Event stream payloads reach the channel in order and the end is reported.
///
/// Inputs:
/// - A keep-alive comment, a `news_updated` event and an unrelated event.
///
/// Output:
/// - `GET /api/stream`, both payloads forwarded, `StreamOutcome::Ended`.
async fn stream_forwards_event_payloads() {
    let body = ": keep-alive\n\ndata: {\"type\":\"news_updated\"}\n\ndata: {\"type\":\"ping\"}\n\n";
    let (base, server) = serve_once("200 OK", "text/event-stream", body.to_string()).await;
    let client = NewsClient::new(&base).expect("client");

    let response = client.open_stream().await.expect("stream opens");
    let (tx, mut rx) = mpsc::unbounded_channel();
    let outcome = tokio::time::timeout(Duration::from_secs(5), pump_events(response, &tx))
        .await
        .expect("stream ends")
        .expect("no read error");
    assert_eq!(outcome, StreamOutcome::Ended);

    let request_line = server.await.expect("responder");
    assert!(request_line.starts_with("GET /api/stream "), "{request_line}");
    assert_eq!(rx.recv().await.as_deref(), Some(r#"{"type":"news_updated"}"#));
    assert_eq!(rx.recv().await.as_deref(), Some(r#"{"type":"ping"}"#));
}

#[tokio::test]
/// What: A non-success status on the stream endpoint is a stream error.
async fn stream_error_status_is_reported() {
    let (base, _server) = serve_once("404 Not Found", "text/plain", "missing".to_string()).await;
    let client = NewsClient::new(&base).expect("client");
    let err = client.open_stream().await.expect_err("must fail");
    assert!(matches!(err, NewsError::Stream(_)));
}
