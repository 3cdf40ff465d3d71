#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tessera_server::{AppState, DelayConfig, SiteConfig, create_router};
use tower::ServiceExt;

pub fn config() -> SiteConfig {
    SiteConfig::bundled().unwrap().with_delays(DelayConfig::ZERO)
}

pub fn app_with(config: SiteConfig) -> (Router, AppState) {
    let state = AppState::from_config(config).unwrap();
    (create_router(state.clone()), state)
}

pub fn app() -> Router {
    app_with(config()).0
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `action` and input names of the first `<form>` on a page.
pub fn form_fields(html: &str) -> (String, Vec<String>) {
    let start = html.find("<form").expect("page has a form");
    let end = start + html[start..].find("</form>").expect("form is closed");
    let form = &html[start..end];

    let action = form
        .split("action=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("form has an action")
        .to_string();
    let names = form
        .split(" name=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(String::from)
        .collect();
    (action, names)
}
