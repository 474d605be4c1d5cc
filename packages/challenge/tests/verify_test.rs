//! Verification client tests over an in-memory transport

use proptest::prelude::*;
use recaptcha_challenge::{
    parse_response, ChallengeError, Transport, VerificationOutcome, Verifier,
    INCORRECT_CAPTCHA_SOL,
};
use recaptcha_common::{LoggingTransformer, ServiceConfig, DEFAULT_VERIFY_SERVER};
use std::cell::RefCell;

const PRIVATE_KEY: &str = "6LcAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Canned reply handed back by the test transport
enum Reply {
    Body(&'static str),
    Refused,
}

/// Records every POST and answers with a canned reply
struct RecordingTransport {
    reply: Reply,
    calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl RecordingTransport {
    fn replying(body: &'static str) -> Self {
        Self {
            reply: Reply::Body(body),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn refusing() -> Self {
        Self {
            reply: Reply::Refused,
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Transport for RecordingTransport {
    fn post_form(&self, url: &str, fields: &[(&str, &str)]) -> recaptcha_challenge::Result<String> {
        self.calls.borrow_mut().push((
            url.to_string(),
            fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        ));
        match self.reply {
            Reply::Body(body) => Ok(body.to_string()),
            Reply::Refused => Err(ChallengeError::Transport {
                context: "connection refused".to_string(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "refused",
                )),
            }),
        }
    }
}

fn config() -> ServiceConfig {
    ServiceConfig::with_keys("site-public-key", PRIVATE_KEY).expect("valid keys")
}

#[test]
fn test_missing_remote_ip_fails_before_network() {
    LoggingTransformer::init_test();
    let transport = RecordingTransport::replying("true\n");
    let verifier = Verifier::with_transport(&config(), &transport);

    let err = verifier.verify("", "challenge", "answer", &[]).unwrap_err();
    assert!(matches!(err, ChallengeError::MissingRemoteIp));

    let err = verifier.verify("   ", "challenge", "answer", &[]).unwrap_err();
    assert!(matches!(err, ChallengeError::MissingRemoteIp));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_empty_challenge_or_response_short_circuits() {
    let transport = RecordingTransport::replying("true\n");
    let verifier = Verifier::with_transport(&config(), &transport);

    let outcome = verifier.verify("203.0.113.7", "", "x", &[]).expect("negative outcome");
    assert_eq!(
        outcome,
        VerificationOutcome {
            success: false,
            error_code: Some(INCORRECT_CAPTCHA_SOL.to_string()),
        }
    );

    let outcome = verifier.verify("203.0.113.7", "challenge", "", &[]).expect("negative outcome");
    assert_eq!(outcome, VerificationOutcome::rejected("incorrect-captcha-sol"));
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn test_successful_verification_posts_wire_fields() {
    let transport = RecordingTransport::replying("true\n");
    let verifier = Verifier::with_transport(&config(), &transport);

    let outcome = verifier
        .verify("203.0.113.7", "03AHJ_challenge", "two words", &[("locale", "en")])
        .expect("well-formed reply");
    assert_eq!(outcome, VerificationOutcome::solved());
    assert_eq!(outcome.error_code, None);

    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (url, fields) = &calls[0];
    assert_eq!(url, DEFAULT_VERIFY_SERVER);

    let expected: Vec<(String, String)> = [
        ("privatekey", PRIVATE_KEY),
        ("remoteip", "203.0.113.7"),
        ("challenge", "03AHJ_challenge"),
        ("response", "two words"),
        ("locale", "en"),
    ]
    .iter()
    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
    .collect();
    assert_eq!(fields, &expected);
}

#[test]
fn test_failed_verification_reports_error_code() {
    let transport = RecordingTransport::replying("false\nincorrect-captcha-sol");
    let verifier = Verifier::with_transport(&config(), &transport);

    let outcome = verifier
        .verify("203.0.113.7", "challenge", "wrong", &[])
        .expect("well-formed reply");
    assert_eq!(outcome, VerificationOutcome::rejected("incorrect-captcha-sol"));
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_configured_endpoint_is_used() {
    let config = config().with_verify_server("http://127.0.0.1:8080/verify");
    let transport = RecordingTransport::replying("false\ninvalid-site-private-key\n");
    let verifier = Verifier::with_transport(&config, &transport);
    assert_eq!(verifier.endpoint(), "http://127.0.0.1:8080/verify");

    let outcome = verifier
        .verify("203.0.113.7", "challenge", "answer", &[])
        .expect("well-formed reply");
    assert_eq!(outcome.error_code.as_deref(), Some("invalid-site-private-key"));
    assert_eq!(transport.calls.borrow()[0].0, "http://127.0.0.1:8080/verify");
}

#[test]
fn test_malformed_replies_are_protocol_errors() {
    for body in ["", "\n", "   \n  ", "false", "false\n", "false\n   \n"] {
        let transport = RecordingTransport::replying(body);
        let verifier = Verifier::with_transport(&config(), &transport);
        let err = verifier
            .verify("203.0.113.7", "challenge", "answer", &[])
            .unwrap_err();
        assert!(
            matches!(err, ChallengeError::Protocol(_)),
            "body {body:?} gave {err:?}"
        );
    }
}

#[test]
fn test_transport_errors_propagate() {
    let transport = RecordingTransport::refusing();
    let verifier = Verifier::with_transport(&config(), transport);

    let err = verifier
        .verify("203.0.113.7", "challenge", "answer", &[])
        .unwrap_err();
    assert!(matches!(err, ChallengeError::Transport { .. }));
    assert!(std::error::Error::source(&err).is_some());

    let transport = verifier.into_transport();
    assert_eq!(transport.call_count(), 1);
}

#[test]
fn test_parse_response_trims_lines() {
    assert_eq!(
        parse_response("true\r\n").expect("valid"),
        VerificationOutcome::solved()
    );
    assert_eq!(
        parse_response("  true  ").expect("valid"),
        VerificationOutcome::solved()
    );
    assert_eq!(
        parse_response("false\r\n incorrect-captcha-sol \r\n").expect("valid"),
        VerificationOutcome::rejected("incorrect-captcha-sol")
    );
    // "true" is matched exactly
    assert_eq!(
        parse_response("TRUE\nsomething").expect("valid"),
        VerificationOutcome::rejected("something")
    );
}

#[cfg(feature = "http")]
#[test]
fn test_default_verifier_uses_configured_endpoint() {
    let verifier = Verifier::new(&config()).expect("http client initializes");
    assert_eq!(verifier.endpoint(), DEFAULT_VERIFY_SERVER);
}

proptest! {
    #[test]
    fn any_error_code_round_trips(code in "[a-z][a-z-]{0,40}") {
        let outcome = parse_response(&format!("false\n{code}\n")).expect("well-formed");
        prop_assert!(!outcome.success);
        prop_assert_eq!(outcome.error_code, Some(code));
    }
}
