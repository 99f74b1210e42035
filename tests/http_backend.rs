// Drives the real reqwest transport against a throwaway backend on localhost.
use hello_form::client::config::{ClientConfig, Environment};
use hello_form::client::form::GreetingForm;
use hello_form::client::services::greeting_service::GreetingService;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

#[derive(Debug)]
struct SeenRequest {
    request_line: String,
    content_type: Option<String>,
    body: String,
}

/// Serves `replies` in order, one connection each, and reports what it saw.
async fn spawn_backend(replies: Vec<(u16, &'static str, &'static str)>) -> (String, mpsc::UnboundedReceiver<SeenRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        for (status, content_type, body) in replies {
            let (stream, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut reader = BufReader::new(reader);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).await.unwrap();
            let mut content_length = 0usize;
            let mut seen_type = None;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).await.unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((key, value)) = line.split_once(':') {
                    match key.to_ascii_lowercase().as_str() {
                        "content-length" => content_length = value.trim().parse().unwrap(),
                        "content-type" => seen_type = Some(value.trim().to_string()),
                        _ => {}
                    }
                }
            }
            let mut buf = vec![0u8; content_length];
            reader.read_exact(&mut buf).await.unwrap();
            let _ = tx.send(SeenRequest {
                request_line: request_line.trim_end().to_string(),
                content_type: seen_type,
                body: String::from_utf8(buf).unwrap(),
            });

            let reason = if status == 200 { "OK" } else { "Internal Server Error" };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason,
                content_type,
                body.len(),
                body
            );
            writer.write_all(response.as_bytes()).await.unwrap();
            writer.shutdown().await.unwrap();
        }
    });

    (format!("http://{}/api/hello", addr), rx)
}

fn form_for(endpoint: &str) -> GreetingForm {
    let config = ClientConfig::new(Environment::Development).with_endpoints(endpoint, "http://127.0.0.1:9/unused");
    GreetingForm::new(GreetingService::new(config))
}

#[tokio::test]
async fn posts_json_name_and_renders_each_reply_shape() {
    let (endpoint, mut seen) = spawn_backend(vec![
        (200, "text/plain", "Hi Alice"),
        (200, "application/json", r#"{"message":"Hi Alice"}"#),
        (200, "application/json", r#"{"foo":1}"#),
    ])
    .await;
    let mut form = form_for(&endpoint);
    form.set_name("Alice");

    form.submit().await.unwrap();
    assert_eq!(form.state().response, "Hi Alice");
    let req = seen.recv().await.unwrap();
    assert_eq!(req.request_line, "POST /api/hello HTTP/1.1");
    assert_eq!(req.content_type.as_deref(), Some("application/json"));
    assert_eq!(req.body, r#"{"name":"Alice"}"#);

    form.submit().await.unwrap();
    assert_eq!(form.state().response, "Hi Alice");
    seen.recv().await.unwrap();

    form.submit().await.unwrap();
    assert_eq!(form.state().response, r#"{"foo":1}"#);
    seen.recv().await.unwrap();
    assert!(!form.state().is_loading());
}

#[tokio::test]
async fn server_error_shows_fixed_text() {
    let (endpoint, _seen) = spawn_backend(vec![(500, "text/plain", "boom")]).await;
    let mut form = form_for(&endpoint);
    form.set_name("Alice");

    let settled = form.submit().await.unwrap();
    assert_eq!(form.state().response, "Error connecting to backend");
    assert_eq!(settled.failure.as_deref(), Some("backend replied with HTTP 500"));
    assert!(!form.state().is_loading());
}

#[tokio::test]
async fn unreachable_backend_shows_fixed_text() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut form = form_for(&format!("http://{}/api/hello", addr));
    form.set_name("Alice");
    let settled = form.submit().await.unwrap();
    assert_eq!(form.state().response, "Error connecting to backend");
    assert!(settled.failure.is_some());
}

#[tokio::test]
async fn untrimmed_name_is_sent_as_typed() {
    let (endpoint, mut seen) = spawn_backend(vec![(200, "text/plain", "ok")]).await;
    let mut form = form_for(&endpoint);
    form.set_name(" Bob ");
    form.submit().await.unwrap();
    assert_eq!(seen.recv().await.unwrap().body, r#"{"name":" Bob "}"#);
}
