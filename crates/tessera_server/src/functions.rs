//! Serverless-style function endpoints used by the settings screen.
//!
//! Both accept `POST` with a JSON body and answer preflight `OPTIONS`.
//! Every response carries permissive CORS headers.

use crate::{ApiError, ApiResult, AppState};
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tessera_core::{SmtpConfig, SmtpConfigBuilder};
use tessera_error::{BuilderError, JsonError};
use tessera_notify::probe_smtp;
use tracing::{info, instrument};

/// Allowed request headers.
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
/// Allowed methods.
pub const CORS_ALLOW_METHODS: &str = "POST, OPTIONS";

/// Successful function response.
#[derive(Debug, Serialize)]
pub struct FunctionResponse {
    /// Always true
    pub success: bool,
    /// Human-readable result
    pub message: String,
    /// Completion time
    pub timestamp: DateTime<Utc>,
}

/// `test-smtp` request body.
#[derive(Debug, Default, Deserialize)]
pub struct TestSmtpRequest {
    host: Option<String>,
    port: Option<PortInput>,
    secure: Option<bool>,
    user: Option<String>,
    password: Option<String>,
}

/// SMTP block of a `send-test-email` request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmtpFields {
    host: Option<String>,
    port: Option<PortInput>,
    user: Option<String>,
    password: Option<String>,
    from_email: Option<String>,
    from_name: Option<String>,
}

/// `send-test-email` request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTestEmailRequest {
    to: Option<String>,
    smtp_config: Option<SmtpFields>,
}

/// Port as sent by a settings form: a JSON number or the text of an input field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PortInput {
    /// `"port": 587`
    Number(i64),
    /// `"port": "587"`, or `""` for an empty field
    Text(String),
}

/// Resolve the port; `0` means missing so the required-field check reports it.
fn resolve_port(port: Option<PortInput>) -> Result<u16, ApiError> {
    let invalid = || ApiError::bad_request("Port must be a number between 1 and 65535");
    match port {
        None => Ok(0),
        Some(PortInput::Number(n)) => u16::try_from(n).map_err(|_| invalid()),
        Some(PortInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(0)
            } else {
                text.parse::<u16>().map_err(|_| invalid())
            }
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TestSmtpRequest {
    fn into_config(self) -> Result<SmtpConfig, ApiError> {
        Ok(SmtpConfig {
            host: self.host.unwrap_or_default(),
            port: resolve_port(self.port)?,
            secure: self.secure.unwrap_or(false),
            user: self.user.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            ..SmtpConfig::default()
        })
    }
}

impl SmtpFields {
    fn into_config(self) -> Result<SmtpConfig, ApiError> {
        let mut builder = SmtpConfigBuilder::default();
        builder
            .host(self.host.unwrap_or_default())
            .port(resolve_port(self.port)?)
            .user(self.user.unwrap_or_default())
            .password(self.password.unwrap_or_default());
        if let Some(from_email) = present(self.from_email) {
            builder.from_email(from_email);
        }
        if let Some(from_name) = present(self.from_name) {
            builder.from_name(from_name);
        }
        builder
            .build()
            .map_err(|e| BuilderError::from(e.to_string()).into())
    }
}

/// Parse a JSON body; malformed input is an internal error for these endpoints.
fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, JsonError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| JsonError::new(format!("Invalid request body: {}", e)))
}

async fn cors(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    response
}

async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Routes under `/functions`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/functions/test-smtp", post(test_smtp).options(preflight))
        .route(
            "/functions/send-test-email",
            post(send_test_email).options(preflight),
        )
        .layer(middleware::from_fn(cors))
}

/// Validate SMTP settings and pretend to connect.
#[instrument(skip_all)]
async fn test_smtp(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<FunctionResponse>> {
    let request: TestSmtpRequest = parse_body(&body)?;
    let smtp = request.into_config()?;
    state.metrics().record_probe();

    let report = probe_smtp(&smtp, state.config().delays().test_smtp()).await?;
    Ok(Json(FunctionResponse {
        success: report.success,
        message: report.message,
        timestamp: report.timestamp,
    }))
}

/// Validate the request and send a simulated test message.
#[instrument(skip_all)]
async fn send_test_email(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<FunctionResponse>> {
    let request: SendTestEmailRequest = parse_body(&body)?;

    let (to, fields) = match (present(request.to), request.smtp_config) {
        (Some(to), Some(fields)) => (to, fields),
        _ => {
            return Err(ApiError::bad_request(
                "Missing required fields: to, smtpConfig",
            ));
        }
    };
    let smtp = fields.into_config()?;
    let missing = smtp.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::bad_request(format!(
            "Missing required SMTP configuration: {}",
            missing.join(", ")
        )));
    }

    let outcome = state.email().send_test_email(&to, &smtp).await?;
    info!(log_id = %outcome.log_id, to = %to, "Test email sent");

    Ok(Json(FunctionResponse {
        success: true,
        message: format!("Test email sent successfully to {}", to),
        timestamp: Utc::now(),
    }))
}
