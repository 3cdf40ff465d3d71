mod test_utils;

use axum::http::StatusCode;
use test_utils::*;
use std::time::Duration;
use tessera_server::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, DelayConfig};

const FULL_SMTP: &str =
    r#"{"host":"smtp.example.com","port":587,"secure":false,"user":"mailer","password":"pw"}"#;

fn assert_cors(response: &axum::http::Response<axum::body::Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], CORS_ALLOW_HEADERS);
    assert_eq!(headers["access-control-allow-methods"], CORS_ALLOW_METHODS);
}

#[tokio::test]
async fn preflight_returns_cors_headers() {
    for uri in ["/functions/test-smtp", "/functions/send-test-email"] {
        let response = send(app(), json_request("OPTIONS", uri, "")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
    }
}

#[tokio::test]
async fn test_smtp_rejects_each_missing_field() {
    for field in ["host", "port", "user", "password"] {
        let mut body: serde_json::Value = serde_json::from_str(FULL_SMTP).unwrap();
        body.as_object_mut().unwrap().remove(field);

        let response = send(
            app(),
            json_request("POST", "/functions/test-smtp", &body.to_string()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "missing {field}");
        assert_cors(&response);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains(field));
    }
}

#[tokio::test]
async fn test_smtp_treats_blank_strings_as_missing() {
    let body = r#"{"host":"  ","port":587,"user":"mailer","password":"pw"}"#;
    let response = send(app(), json_request("POST", "/functions/test-smtp", body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_smtp_succeeds_after_delay() {
    let config = config().with_delays(DelayConfig {
        test_smtp_ms: 1000,
        ..DelayConfig::ZERO
    });
    let (app, state) = app_with(config);

    let started = tokio::time::Instant::now();
    let response = send(app, json_request("POST", "/functions/test-smtp", FULL_SMTP)).await;
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("smtp.example.com"));
    assert!(json["timestamp"].is_string());
    assert_eq!(state.metrics().snapshot().smtp_probes, 1);
}

#[tokio::test]
async fn malformed_json_is_an_internal_error() {
    let response = send(
        app(),
        json_request("POST", "/functions/test-smtp", "{not json"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_cors(&response);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn send_test_email_requires_recipient_and_smtp() {
    for body in [
        r#"{}"#,
        r#"{"to":"ops@example.com"}"#,
        r#"{"smtpConfig":{"host":"h","port":25,"user":"u","password":"p"}}"#,
        r#"{"to":"ops@example.com","smtpConfig":{"host":"h","port":25,"user":"u"}}"#,
    ] {
        let response = send(
            app(),
            json_request("POST", "/functions/send-test-email", body),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        assert_eq!(body_json(response).await["success"], false);
    }
}

#[tokio::test(start_paused = true)]
async fn send_test_email_logs_and_succeeds() {
    let config = config().with_delays(DelayConfig {
        send_test_email_ms: 2000,
        ..DelayConfig::ZERO
    });
    let (app, state) = app_with(config);
    let body = r#"{"to":"ops@example.com","smtpConfig":{"host":"smtp.example.com","port":587,"user":"mailer","password":"pw","fromName":"Ops"}}"#;

    let started = tokio::time::Instant::now();
    let response = send(app, json_request("POST", "/functions/send-test-email", body)).await;
    assert!(started.elapsed() >= Duration::from_millis(2000));
    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(&response);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("ops@example.com"));
    assert_eq!(state.email().log().len(), 1);
}

#[tokio::test]
async fn test_smtp_treats_blank_or_zero_port_as_missing() {
    for port in [r#""""#, r#""   ""#, "null", "0"] {
        let body = format!(
            r#"{{"host":"smtp.example.com","port":{port},"user":"mailer","password":"pw"}}"#
        );
        let response = send(app(), json_request("POST", "/functions/test-smtp", &body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "port {port}");
        assert_cors(&response);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("port"), "port {port}");
    }
}

#[tokio::test]
async fn test_smtp_accepts_port_as_text() {
    let body = r#"{"host":"smtp.example.com","port":" 587 ","user":"mailer","password":"pw"}"#;
    let response = send(app(), json_request("POST", "/functions/test-smtp", body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["message"].as_str().unwrap().contains("smtp.example.com:587"));
}

#[tokio::test]
async fn test_smtp_rejects_non_numeric_port() {
    for port in [r#""smtp""#, "-25", "70000", r#""70000""#] {
        let body = format!(
            r#"{{"host":"smtp.example.com","port":{port},"user":"mailer","password":"pw"}}"#
        );
        let response = send(app(), json_request("POST", "/functions/test-smtp", &body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "port {port}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("Port must be a number"));
    }
}

#[tokio::test]
async fn send_test_email_reads_port_from_text_field() {
    let ok = r#"{"to":"ops@example.com","smtpConfig":{"host":"smtp.example.com","port":"2525","user":"mailer","password":"pw"}}"#;
    let response = send(app(), json_request("POST", "/functions/send-test-email", ok)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let blank = r#"{"to":"ops@example.com","smtpConfig":{"host":"smtp.example.com","port":"","user":"mailer","password":"pw"}}"#;
    let response = send(app(), json_request("POST", "/functions/send-test-email", blank)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["error"].as_str().unwrap().contains("port"));
}
