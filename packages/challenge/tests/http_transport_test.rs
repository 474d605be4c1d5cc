//! Blocking HTTP transport against a local one-shot server

#![cfg(feature = "http")]

use recaptcha_challenge::{ChallengeError, HttpTransport, Transport, VerificationOutcome, Verifier};
use recaptcha_common::ServiceConfig;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const PRIVATE_KEY: &str = "6LcPRIVATEKEY";

/// Serves exactly one canned response and hands back the raw request
struct OneShotServer {
    url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    fn start(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let url = format!(
            "http://{}/recaptcha/api/verify",
            listener.local_addr().expect("local addr")
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).expect("write response");
            request
        });

        Self { url, handle }
    }

    fn request(self) -> String {
        self.handle.join().expect("server thread")
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let read = stream.read(&mut chunk).expect("read request");
        if read == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..read]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8(buf).expect("utf-8 request")
}

fn transport() -> HttpTransport {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client");
    HttpTransport::from_client(client)
}

fn config(url: &str) -> ServiceConfig {
    ServiceConfig::with_keys("6LcPUBLICKEY", PRIVATE_KEY)
        .expect("valid keys")
        .with_verify_server(url)
}

#[test]
fn test_form_post_carries_wire_fields_in_order() {
    let server = OneShotServer::start("200 OK", "true\n");
    let verifier = Verifier::with_transport(&config(&server.url), transport());

    let outcome = verifier
        .verify("203.0.113.7", "03AHJ_challenge", "two words", &[])
        .expect("well-formed reply");
    assert_eq!(outcome, VerificationOutcome::solved());

    let request = server.request();
    assert!(request.starts_with("POST /recaptcha/api/verify HTTP/1.1\r\n"));
    assert!(request
        .to_ascii_lowercase()
        .contains("content-type: application/x-www-form-urlencoded"));

    let (_, body) = request.split_once("\r\n\r\n").expect("request body");
    assert_eq!(
        body,
        "privatekey=6LcPRIVATEKEY&remoteip=203.0.113.7&challenge=03AHJ_challenge&response=two+words"
    );
}

#[test]
fn test_rejection_body_is_read_back() {
    let server = OneShotServer::start("200 OK", "false\nincorrect-captcha-sol\n");
    let verifier = Verifier::with_transport(&config(&server.url), transport());

    let outcome = verifier
        .verify("203.0.113.7", "challenge", "wrong", &[("locale", "de")])
        .expect("well-formed reply");
    assert_eq!(outcome, VerificationOutcome::rejected("incorrect-captcha-sol"));
    assert!(server.request().ends_with("&response=wrong&locale=de"));
}

#[test]
fn test_server_error_maps_to_http_status() {
    let server = OneShotServer::start("500 Internal Server Error", "oops");
    let err = transport()
        .post_form(&server.url, &[("privatekey", PRIVATE_KEY)])
        .unwrap_err();

    assert!(matches!(err, ChallengeError::HttpStatus { status: 500 }));
    server.request();
}

#[test]
fn test_unreachable_endpoint_is_a_transport_error() {
    // bind then drop so the port is very likely closed
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        format!("http://{}/verify", listener.local_addr().expect("local addr"))
    };

    let err = transport().post_form(&url, &[]).unwrap_err();
    assert!(matches!(err, ChallengeError::Transport { .. }));
}
