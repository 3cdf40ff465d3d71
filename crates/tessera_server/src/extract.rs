//! Request body extraction shared by the public form endpoints.

use crate::ApiError;
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json, async_trait};
use serde::de::DeserializeOwned;

/// Body decoded from either a browser form post or a JSON request.
///
/// `application/x-www-form-urlencoded` bodies go through [`Form`]; anything
/// else is handed to [`Json`], which keeps its content-type checks.
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

fn is_urlencoded(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            value
                .trim_start()
                .starts_with("application/x-www-form-urlencoded")
        })
}

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_urlencoded(&request) {
            let Form(value) = Form::<T>::from_request(request, state)
                .await
                .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(request, state)
                .await
                .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
            Ok(Self(value))
        }
    }
}
