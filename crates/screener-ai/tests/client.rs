use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use screener_ai::TextGenerator;
use screener_ai::client::{DEFAULT_MODEL, GeminiClient, GeminiConfig, reply_text, request_body};
use screener_ai::error::AiError;
use serde_json::json;

#[test]
fn config_defaults() {
    let config = GeminiConfig::new("secret");
    assert_eq!(config.model, DEFAULT_MODEL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(
        config.endpoint(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
    );
    assert!(!config.endpoint().contains("secret"));
}

#[test]
fn endpoint_uses_configured_model_and_base() {
    let mut config = GeminiConfig::new("k");
    config.model = "gemini-1.5-flash".to_string();
    config.base_url = "http://127.0.0.1:9000/v1/".to_string();
    assert_eq!(
        config.endpoint(),
        "http://127.0.0.1:9000/v1/models/gemini-1.5-flash:generateContent"
    );
}

#[test]
fn request_wraps_prompt() {
    assert_eq!(
        request_body("hello"),
        json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
    );
}

#[test]
fn reply_text_reads_first_candidate() {
    let body = json!({
        "candidates": [
            { "content": { "parts": [{ "text": "first" }, { "text": "second" }] } },
            { "content": { "parts": [{ "text": "other" }] } }
        ]
    });
    assert_eq!(reply_text(&body).unwrap(), "first");
}

#[test]
fn reply_without_candidates_is_a_parse_error() {
    let result = reply_text(&json!({ "promptFeedback": { "blockReason": "SAFETY" } }));
    assert!(matches!(result, Err(AiError::ResponseParse(_))));
}

/// Serve one HTTP request with `status` and `body`, returning the request
/// line and body the client sent.
fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<(String, String)>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/v1beta", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut sent = vec![0; content_length];
        reader.read_exact(&mut sent).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        (request_line, String::from_utf8(sent).unwrap())
    });

    (base_url, handle)
}

fn client_for(base_url: String) -> GeminiClient {
    let mut config = GeminiConfig::new("test-key");
    config.base_url = base_url;
    config.timeout = Duration::from_secs(5);
    GeminiClient::new(config)
}

#[test]
fn generate_posts_prompt_and_reads_candidate() {
    let reply = json!({ "candidates": [{ "content": { "parts": [{ "text": "{}" }] } }] });
    let (base_url, server) = serve_once("200 OK", reply.to_string());

    let text = client_for(base_url).generate("hello").unwrap();
    assert_eq!(text, "{}");

    let (request_line, sent) = server.join().unwrap();
    assert!(request_line.starts_with("POST /v1beta/models/gemini-pro:generateContent?key=test-key "));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&sent).unwrap(),
        request_body("hello")
    );
}

#[test]
fn error_status_is_an_invocation_error() {
    let (base_url, server) = serve_once(
        "503 Service Unavailable",
        json!({ "error": { "code": 503 } }).to_string(),
    );

    let result = client_for(base_url).generate("hello");
    assert!(matches!(result, Err(AiError::Invocation(_))), "{result:?}");
    server.join().unwrap();
}
