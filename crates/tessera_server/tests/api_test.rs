mod test_utils;

use axum::http::StatusCode;
use test_utils::*;
use std::time::Duration;
use tessera_server::DelayConfig;

fn ids(json: &serde_json::Value) -> Vec<u64> {
    json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn health_and_metrics() {
    let response = send(app(), get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");

    let response = send(app(), get("/metrics")).await;
    let json = body_json(response).await;
    assert_eq!(json["waitlist_sent"], 0);
    assert_eq!(json["success_rate"], 1.0);
}

#[tokio::test]
async fn article_listing_defaults_to_newest_first() {
    let json = body_json(send(app(), get("/api/admin/articles")).await).await;
    assert_eq!(json["total"], 6);
    assert_eq!(json["sort"], "date");
    assert_eq!(json["order"], "desc");
    assert_eq!(ids(&json)[0], 1);
}

#[tokio::test]
async fn article_listing_filters_and_sorts() {
    let uri = "/api/admin/articles?q=ROTH";
    let json = body_json(send(app(), get(uri)).await).await;
    assert_eq!(ids(&json), vec![5]);

    let uri = "/api/admin/articles?category=Lending&sort=date&order=asc";
    let json = body_json(send(app(), get(uri)).await).await;
    assert_eq!(ids(&json), vec![3, 6]);

    let uri = "/api/admin/articles?category=All&sort=author";
    let json = body_json(send(app(), get(uri)).await).await;
    assert_eq!(json["order"], "asc");
    assert_eq!(json["count"], 6);
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let response = send(app(), get("/api/admin/users?sort=shoe_size")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("shoe_size"));
}

#[tokio::test]
async fn user_and_waitlist_status_filters() {
    let json = body_json(send(app(), get("/api/admin/users?status=pending")).await).await;
    assert_eq!(ids(&json), vec![4]);

    let json = body_json(send(app(), get("/api/admin/waitlist?status=high&sort=name")).await).await;
    assert_eq!(ids(&json), vec![4, 1]);
}

#[tokio::test(start_paused = true)]
async fn delete_waits_and_listing_is_unchanged() {
    let config = config().with_delays(DelayConfig {
        delete_ms: 1000,
        ..DelayConfig::ZERO
    });
    let (app, _) = app_with(config);

    let before = body_json(send(app.clone(), get("/api/admin/faqs")).await).await;

    let started = tokio::time::Instant::now();
    let response = send(app.clone(), json_request("DELETE", "/api/admin/faqs/2", "")).await;
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 2);
    assert_eq!(json["removed"], false);

    let after = body_json(send(app, get("/api/admin/faqs")).await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    for uri in [
        "/api/admin/articles/99",
        "/api/admin/faqs/99",
        "/api/admin/users/99",
        "/api/admin/waitlist/99",
    ] {
        let response = send(app(), json_request("DELETE", uri, "")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn user_edit_reports_field_errors() {
    let body = r#"{"name":"","email":"nope","role":"user","status":"active"}"#;
    let response = send(app(), json_request("PUT", "/api/admin/users/3", body)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["fields"]["name"], "Name is required");
    assert_eq!(json["fields"]["email"], "Please enter a valid email address");
}

#[tokio::test]
async fn user_edit_returns_updated_copy_without_persisting() {
    let body = r#"{"name":"Sofia A.","email":"sofia@example.com","role":"editor","status":"active","verified":true}"#;
    let (app, state) = app_with(config());

    let response = send(app.clone(), json_request("PUT", "/api/admin/users/3", body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["persisted"], false);
    assert_eq!(json["user"]["name"], "Sofia A.");
    assert_eq!(json["user"]["role"], "editor");

    let fetched = body_json(send(app, get("/api/admin/users/3")).await).await;
    assert_eq!(fetched["name"], "Sofia Alvarez");
    assert_eq!(state.catalog().user(3).unwrap().name, "Sofia Alvarez");
}

#[tokio::test]
async fn missing_user_is_not_found() {
    let response = send(app(), get("/api/admin/users/42")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn settings_are_redacted_and_save_validates() {
    let config = tessera_server::SiteConfig::from_toml_str(
        r#"
[settings.smtp]
host = "smtp.example.com"
user = "mailer"
password = "hunter2"
"#,
    )
    .unwrap()
    .with_delays(DelayConfig::ZERO);
    let (app, _) = app_with(config);

    let json = body_json(send(app.clone(), get("/api/admin/settings")).await).await;
    assert_eq!(json["smtp"]["host"], "smtp.example.com");
    assert_eq!(json["smtp"]["password"], "");

    let incomplete = r#"{"smtp":{"host":"smtp.example.com"},"features":{"email_notifications":true}}"#;
    let response = send(app.clone(), json_request("PUT", "/api/admin/settings", incomplete)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let complete = r#"{"smtp":{"host":"smtp.example.com","user":"mailer","password":"pw"}}"#;
    let response = send(app, json_request("PUT", "/api/admin/settings", complete)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["persisted"], false);
    assert_eq!(json["settings"]["smtp"]["password"], "");
}

#[tokio::test]
async fn dashboard_reports_counts() {
    let json = body_json(send(app(), get("/api/admin/dashboard")).await).await;
    assert_eq!(json["articles"], 6);
    assert_eq!(json["users_by_status"]["pending"], 1);
    assert_eq!(json["recent_articles"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn waitlist_signup_sends_and_logs() {
    let (app, state) = app_with(config());
    let body = r#"{"email":"ana@example.com","product":"tessera card","name":"Ana"}"#;

    let response = send(app.clone(), json_request("POST", "/api/waitlist", body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["notified"], true);
    assert_eq!(json["outcome"]["success"], true);

    let entries = state.email().log().entries();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].subject().contains("Tessera Card"));

    let log = body_json(send(app, get("/api/admin/email-log")).await).await;
    assert_eq!(log["count"], 1);
    assert_eq!(log["entries"][0]["status"], "sent");
}

#[tokio::test]
async fn forms_validate_input() {
    let response = send(
        app(),
        json_request("POST", "/api/waitlist", r#"{"email":"bad","product":"X"}"#),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        app(),
        json_request(
            "POST",
            "/api/contact",
            r#"{"email":"ana@example.com","name":"Ana","subject":" ","message":"Hi"}"#,
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Subject is required");
}

#[tokio::test]
async fn contact_without_notifications_skips_email() {
    let config = tessera_server::SiteConfig::from_toml_str(
        "[settings.features]\nemail_notifications = false\n",
    )
    .unwrap()
    .with_delays(DelayConfig::ZERO);
    let (app, state) = app_with(config);
    let body = r#"{"email":"ana@example.com","name":"Ana","subject":"Fees","message":"Hi"}"#;

    let response = send(app, json_request("POST", "/api/contact", body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["notified"], false);
    assert!(state.email().log().is_empty());
}

#[tokio::test]
async fn closed_waitlist_is_forbidden() {
    let config = tessera_server::SiteConfig::from_toml_str(
        "[settings.features]\nwaitlist_enabled = false\n",
    )
    .unwrap()
    .with_delays(DelayConfig::ZERO);
    let (app, _) = app_with(config);
    let body = r#"{"email":"ana@example.com","product":"X"}"#;
    let response = send(app, json_request("POST", "/api/waitlist", body)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn contact_accepts_urlencoded_form_posts() {
    let (app, state) = app_with(config());
    let body = "name=Ana&email=ana%40example.com&subject=Hi&message=Hello";

    let response = send(app, form_request("/api/contact", body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["notified"], true);

    let entries = state.email().log().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].to(), "ana@example.com");
}

#[tokio::test]
async fn waitlist_form_post_with_blank_name_is_accepted() {
    let (app, state) = app_with(config());
    let body = "name=&email=ana%40example.com&product=tessera+card";

    let response = send(app, form_request("/api/waitlist", body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["notified"], true);
    assert!(state.email().log().entries()[0].subject().contains("Tessera Card"));
}

#[tokio::test]
async fn urlencoded_form_is_still_validated() {
    let response = send(
        app(),
        form_request("/api/contact", "name=Ana&email=ana%40example.com&subject=+&message=Hi"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Subject is required");

    let response = send(app(), form_request("/api/contact", "name=Ana")).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn rendered_forms_submit_to_working_endpoints() {
    let sample = |field: &str| match field {
        "email" => "ana%40example.com",
        "product" => "Tessera+Card",
        _ => "Ana",
    };

    for page in ["/contact", "/waitlist"] {
        let (app, state) = app_with(config());
        let html = body_text(send(app.clone(), get(page)).await).await;
        let (action, names) = form_fields(&html);
        assert!(names.contains(&"email".to_string()), "{page}");

        let body = names
            .iter()
            .map(|name| format!("{}={}", name, sample(name)))
            .collect::<Vec<_>>()
            .join("&");
        let response = send(app, form_request(&action, &body)).await;
        assert_eq!(response.status(), StatusCode::OK, "{page} -> {action}");
        assert_eq!(state.email().log().len(), 1, "{page}");
    }
}

#[tokio::test]
async fn email_log_keeps_only_the_newest_entries() {
    let config = tessera_server::SiteConfig::from_toml_str("[email_log]\nmax_entries = 2\n")
        .unwrap()
        .with_delays(DelayConfig::ZERO);
    let (app, state) = app_with(config);

    for i in 0..4 {
        let body = format!(r#"{{"email":"user{i}@example.com","product":"X"}}"#);
        let response = send(app.clone(), json_request("POST", "/api/waitlist", &body)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(state.email().log().len(), 2);
    assert_eq!(state.metrics().snapshot().waitlist_sent, 4);

    let log = body_json(send(app, get("/api/admin/email-log")).await).await;
    assert_eq!(log["capacity"], 2);
    assert_eq!(log["count"], 2);
    assert_eq!(log["entries"][1]["to"], "user3@example.com");
}
