// tests/net_fetch.rs
// One-shot HTTP server on a loopback port; answers a single request and closes.
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use globo_channels::core::net::http_get;
use globo_channels::ChannelError;

fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://127.0.0.1:{}/globorio/programacao", listener.local_addr().unwrap().port());
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).into_owned()
    });
    (url, handle)
}

#[test]
fn body_comes_back_on_success() {
    let (url, server) = serve_once("200 OK", "<html>programação</html>");
    let body = http_get(&url).unwrap();
    assert_eq!(body, "<html>programação</html>");

    let request = server.join().unwrap();
    assert!(request.starts_with("GET /globorio/programacao HTTP/1.1\r\n"));
    assert!(request.to_ascii_lowercase().contains("user-agent: "));
}

#[test]
fn error_status_is_reported_with_the_url() {
    let (url, server) = serve_once("404 Not Found", "nope");
    let err = http_get(&url).unwrap_err();
    server.join().unwrap();

    match err {
        ChannelError::Status { status, url: failed } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("unexpected {other:?}"),
    }
}
