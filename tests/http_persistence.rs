//! HTTP persistence tests against an in-process fake endpoint

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use fieldedit::field::EntityId;
use fieldedit::persistence::{FieldUpdate, HttpPersistence, PersistError, Persistence};

/// Request as seen by the fake server
struct Received {
    request_line: String,
    content_type: Option<String>,
    body: String,
}

/// Serve exactly one request with the given status line and body
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/modify_field", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        let mut content_type = None;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                match name.to_ascii_lowercase().as_str() {
                    "content-length" => content_length = value.trim().parse().unwrap(),
                    "content-type" => content_type = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        let mut request_body = vec![0; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();

        Received {
            request_line: request_line.trim_end().to_string(),
            content_type,
            body: String::from_utf8(request_body).unwrap(),
        }
    });

    (url, handle)
}

fn update() -> FieldUpdate {
    FieldUpdate {
        entity_id: EntityId::from(42),
        field: "first_name".into(),
        value: "Joan".into(),
    }
}

#[test]
fn test_posts_json_body() {
    let (url, server) = serve_once("200 OK", "{}");
    let client = HttpPersistence::new(url).unwrap();

    assert_eq!(client.save(&update()), Ok(()));

    let received = server.join().unwrap();
    assert!(received.request_line.starts_with("POST /api/modify_field"));
    assert!(received
        .content_type
        .unwrap()
        .starts_with("application/json"));
    let json: serde_json::Value = serde_json::from_str(&received.body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "entityId": 42, "field": "first_name", "value": "Joan" })
    );
}

#[test]
fn test_any_2xx_is_success() {
    let (url, server) = serve_once("204 No Content", "");
    let client = HttpPersistence::new(url).unwrap();
    assert_eq!(client.save(&update()), Ok(()));
    server.join().unwrap();
}

#[test]
fn test_server_error_message_is_surfaced() {
    let (url, server) = serve_once("500 Internal Server Error", r#"{"error":"disk full"}"#);
    let client = HttpPersistence::new(url).unwrap();

    let err = client.save(&update()).unwrap_err();
    assert_eq!(
        err,
        PersistError::Server {
            status: 500,
            message: "disk full".into()
        }
    );
    server.join().unwrap();
}

#[test]
fn test_unstructured_failure_falls_back_to_status_line() {
    let (url, server) = serve_once("503 Service Unavailable", "down for maintenance");
    let client = HttpPersistence::new(url).unwrap();

    let err = client.save(&update()).unwrap_err();
    assert_eq!(err, PersistError::Status("503 Service Unavailable".into()));
    assert!(err.to_string().contains("503"));
    server.join().unwrap();
}

#[test]
fn test_unreachable_endpoint_is_network_error() {
    // Bind then drop to get a port with nothing listening
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = HttpPersistence::new(format!("http://127.0.0.1:{}/x", port)).unwrap();

    let err = client.save(&update()).unwrap_err();
    assert!(matches!(err, PersistError::Network(_)));
    assert!(err.is_transport());
}
