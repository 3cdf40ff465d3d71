//! JSON API: health, metrics, public forms, and the admin console.

use crate::{ApiError, ApiResult, AppState, FormOrJson};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::str::FromStr;
use tessera_admin::{
    CategoryFilter, DashboardStats, DeleteOutcome, Listing, Manager, SortOrder, UserDraft,
    UserEditor,
};
use tessera_core::{Article, Faq, User, WaitlistItem, is_plausible_email};
use tessera_notify::SendOutcome;
use tracing::{info, instrument};

/// Routes for `/health`, `/metrics`, and `/api/...`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .route("/api/waitlist", post(join_waitlist))
        .route("/api/contact", post(submit_contact))
        .route("/api/admin/dashboard", get(dashboard))
        .route("/api/admin/articles", get(list_articles))
        .route("/api/admin/articles/:id", axum::routing::delete(delete_article))
        .route("/api/admin/faqs", get(list_faqs))
        .route("/api/admin/faqs/:id", axum::routing::delete(delete_faq))
        .route("/api/admin/users", get(list_users))
        .route(
            "/api/admin/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/api/admin/waitlist", get(list_waitlist))
        .route(
            "/api/admin/waitlist/:id",
            axum::routing::delete(delete_waitlist_item),
        )
        .route("/api/admin/settings", get(get_settings).put(save_settings))
        .route("/api/admin/email-log", get(email_log))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Current notification metrics snapshot.
async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics().snapshot()))
}

// ---------------------------------------------------------------------------
// Public forms
// ---------------------------------------------------------------------------

/// Waitlist signup form, posted by `/waitlist` or sent as JSON.
#[derive(Debug, Deserialize)]
pub struct WaitlistSignup {
    email: String,
    product: String,
    #[serde(default)]
    name: Option<String>,
}

/// Contact form, posted by `/contact` or sent as JSON.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    email: String,
    name: String,
    subject: String,
    message: String,
}

/// Form submission result.
#[derive(Debug, Serialize)]
pub struct FormResponse {
    success: bool,
    notified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<SendOutcome>,
}

fn require_email(email: &str) -> ApiResult<()> {
    if email.trim().is_empty() {
        Err(ApiError::bad_request("Email is required"))
    } else if !is_plausible_email(email) {
        Err(ApiError::bad_request("Please enter a valid email address"))
    } else {
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        Err(ApiError::bad_request(format!("{} is required", field)))
    } else {
        Ok(())
    }
}

#[instrument(skip(state, form), fields(product = %form.product))]
async fn join_waitlist(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<WaitlistSignup>,
) -> ApiResult<Json<FormResponse>> {
    let features = state.config().settings().features;
    if !features.waitlist_enabled {
        return Err(ApiError::forbidden("Waitlist signups are closed"));
    }
    require_email(&form.email)?;
    require_text("Product", &form.product)?;

    let product = state
        .catalog()
        .waitlist_by_name(form.product.trim())
        .map(|item| item.name.clone())
        .unwrap_or_else(|| form.product.trim().to_string());

    if !features.email_notifications {
        info!("Waitlist signup recorded without notification");
        return Ok(Json(FormResponse {
            success: true,
            notified: false,
            outcome: None,
        }));
    }

    let outcome = state
        .email()
        .send_waitlist_confirmation(form.email.trim(), &product, form.name.as_deref())
        .await?;
    Ok(Json(FormResponse {
        success: true,
        notified: true,
        outcome: Some(outcome),
    }))
}

#[instrument(skip(state, form))]
async fn submit_contact(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ContactForm>,
) -> ApiResult<Json<FormResponse>> {
    require_email(&form.email)?;
    require_text("Name", &form.name)?;
    require_text("Subject", &form.subject)?;
    require_text("Message", &form.message)?;
    info!(chars = form.message.chars().count(), "Contact message received");

    if !state.config().settings().features.email_notifications {
        return Ok(Json(FormResponse {
            success: true,
            notified: false,
            outcome: None,
        }));
    }

    let outcome = state
        .email()
        .send_contact_confirmation(form.email.trim(), form.name.trim(), form.subject.trim())
        .await?;
    Ok(Json(FormResponse {
        success: true,
        notified: true,
        outcome: Some(outcome),
    }))
}

// ---------------------------------------------------------------------------
// Admin console
// ---------------------------------------------------------------------------

async fn dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(DashboardStats::from_catalog(state.catalog()))
}

/// Query string accepted by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    q: Option<String>,
    category: Option<String>,
    status: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

/// A filtered, sorted admin list.
#[derive(Serialize)]
struct ListResponse<'a, T> {
    total: usize,
    count: usize,
    sort: String,
    order: SortOrder,
    items: Vec<&'a T>,
}

fn list<T>(items: &[T], params: ListParams) -> ApiResult<Json<serde_json::Value>>
where
    T: Listing + Serialize,
    T::SortField: FromStr + std::fmt::Display,
{
    let mut manager = Manager::new(items);
    let state = manager.state_mut();

    if let Some(q) = params.q {
        state.set_search(q);
    }
    if let Some(category) = params.category.as_deref() {
        state.set_category(category.parse().unwrap_or_default());
    }
    if let Some(status) = params.status.as_deref() {
        state.set_status(status.parse::<CategoryFilter>().unwrap_or_default());
    }
    let (default_field, default_order) = T::default_sort();
    let field = match params.sort.as_deref() {
        Some(raw) => raw
            .parse::<T::SortField>()
            .map_err(|_| ApiError::bad_request(format!("Unknown sort field '{}'", raw)))?,
        None => default_field,
    };
    let order = match params.order.as_deref() {
        Some(raw) => raw
            .parse::<SortOrder>()
            .map_err(|_| ApiError::bad_request(format!("Unknown sort order '{}'", raw)))?,
        None if params.sort.is_some() => SortOrder::Asc,
        None => default_order,
    };
    state.set_sort(field, order);

    let view = manager.view();
    let body = ListResponse {
        total: items.len(),
        count: view.len(),
        sort: field.to_string(),
        order,
        items: view,
    };
    serde_json::to_value(body)
        .map(Json)
        .map_err(|e| ApiError::internal(format!("Failed to serialize listing: {}", e)))
}

async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<serde_json::Value>> {
    list::<Article>(state.catalog().articles(), params)
}

async fn list_faqs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<serde_json::Value>> {
    list::<Faq>(state.catalog().faqs(), params)
}

async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<serde_json::Value>> {
    list::<User>(state.catalog().users(), params)
}

async fn list_waitlist(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<serde_json::Value>> {
    list::<WaitlistItem>(state.catalog().waitlist(), params)
}

async fn simulate_delete<T: Listing>(
    items: &[T],
    id: u32,
    state: &AppState,
) -> ApiResult<DeleteOutcome> {
    let mut manager = Manager::new(items).with_delete_delay(state.config().delays().delete());
    manager.request_delete(id)?;
    manager
        .confirm_delete()
        .await
        .ok_or_else(|| ApiError::internal("Delete dialog closed unexpectedly"))
}

async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DeleteOutcome>> {
    let catalog = state.catalog().clone();
    Ok(Json(simulate_delete(catalog.articles(), id, &state).await?))
}

async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DeleteOutcome>> {
    let catalog = state.catalog().clone();
    Ok(Json(simulate_delete(catalog.faqs(), id, &state).await?))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DeleteOutcome>> {
    let catalog = state.catalog().clone();
    Ok(Json(simulate_delete(catalog.users(), id, &state).await?))
}

async fn delete_waitlist_item(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> ApiResult<Json<DeleteOutcome>> {
    let catalog = state.catalog().clone();
    Ok(Json(simulate_delete(catalog.waitlist(), id, &state).await?))
}

async fn get_user(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<Json<User>> {
    Ok(Json(state.catalog().user(id)?.clone()))
}

#[instrument(skip(state, draft))]
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<Json<serde_json::Value>> {
    let catalog = state.catalog().clone();
    let mut editor =
        UserEditor::new(catalog.user(id)?).with_save_delay(state.config().delays().save());
    editor.set_draft(draft);
    let user = editor.save().await.map_err(ApiError::unprocessable)?;
    Ok(Json(json!({
        "success": true,
        "persisted": false,
        "user": user,
    })))
}

async fn get_settings(State(state): State<AppState>) -> Json<tessera_admin::Settings> {
    Json(state.config().settings().redacted())
}

#[instrument(skip_all)]
async fn save_settings(
    State(state): State<AppState>,
    Json(settings): Json<tessera_admin::Settings>,
) -> ApiResult<Json<serde_json::Value>> {
    let receipt = settings.save(state.config().delays().save()).await?;
    Ok(Json(json!({
        "success": true,
        "saved_at": receipt.saved_at(),
        "persisted": receipt.persisted(),
        "settings": settings.redacted(),
    })))
}

async fn email_log(State(state): State<AppState>) -> Json<serde_json::Value> {
    let log = state.email().log();
    let entries = log.entries();
    Json(json!({
        "capacity": log.capacity(),
        "count": entries.len(),
        "entries": entries,
    }))
}
