//! HTTP client adapter for the calculation backend.
//!
//! Every function here resolves its URL through [`crate::config`], attaches
//! the bearer credential from the injected [`SessionStore`] when one exists,
//! and collapses failures into the three-way [`ApiError`] taxonomy:
//! transport failures, backend errors with a `detail` message, and
//! authentication rejections (which the callers answer with a session clear
//! and a redirect to the login page).

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use common::model::address::BaseAddress;
use common::model::calculation::CalculationResponse;
use common::model::session::LoginResponse;
use common::model::user::{ResetPasswordResponse, UserAccount, WhitelistEntry};
use common::requests::{AddWhitelistRequest, ChangePasswordRequest, RegisterRequest};

use crate::config::endpoint;
use crate::session::SessionStore;

/// Client-side classification of a failed backend interaction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response received at all.
    #[error("Erro de conexão ou servidor offline.")]
    Connection,
    /// 401-class rejection. The session must be cleared by the caller.
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized,
    /// Any other HTTP error, carrying the backend's `detail` message when
    /// the body had one.
    #[error("{0}")]
    Backend(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Attaches `Authorization: Bearer <token>` when a credential is stored.
/// Requests without a credential go out unauthenticated; the backend
/// decides whether to reject them.
fn authorized(builder: RequestBuilder, session: &SessionStore) -> RequestBuilder {
    match session.token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Maps an HTTP-level response into the error taxonomy. The backend's
/// `detail` field is surfaced verbatim; an unreadable body falls back to a
/// generic message rather than exposing raw transport detail.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => "Erro no servidor.".to_string(),
    };
    Err(ApiError::Backend(detail))
}

// --- Auth ---

/// `POST /token` with a multipart form of `username` and `password`.
/// Returns the raw snake_case response; the rename into the client session
/// vocabulary happens in `SessionIdentity::from_login`.
pub async fn login(
    session: &SessionStore,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Connection)?;
    form.append_with_str("username", username)
        .map_err(|_| ApiError::Connection)?;
    form.append_with_str("password", password)
        .map_err(|_| ApiError::Connection)?;

    let response = authorized(Request::post(&endpoint("/token")), session)
        .body(form)
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response)
        .await?
        .json::<LoginResponse>()
        .await
        .map_err(|_| ApiError::Connection)
}

pub async fn register(session: &SessionStore, payload: &RegisterRequest) -> Result<(), ApiError> {
    let response = authorized(Request::post(&endpoint("/register")), session)
        .json(payload)
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response).await.map(|_| ())
}

pub async fn change_password(
    session: &SessionStore,
    new_password: &str,
) -> Result<(), ApiError> {
    let payload = ChangePasswordRequest {
        new_password: new_password.to_string(),
    };
    let response = authorized(
        Request::post(&endpoint("/users/change-password")),
        session,
    )
    .json(&payload)
    .map_err(|_| ApiError::Connection)?
    .send()
    .await
    .map_err(|_| ApiError::Connection)?;
    check(response).await.map(|_| ())
}

// --- Admin ---

pub async fn get_whitelist(session: &SessionStore) -> Result<Vec<WhitelistEntry>, ApiError> {
    let response = authorized(Request::get(&endpoint("/admin/whitelist")), session)
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response)
        .await?
        .json::<Vec<WhitelistEntry>>()
        .await
        .map_err(|_| ApiError::Connection)
}

pub async fn add_to_whitelist(session: &SessionStore, matricula: &str) -> Result<(), ApiError> {
    let payload = AddWhitelistRequest {
        matricula: matricula.to_string(),
    };
    let response = authorized(Request::post(&endpoint("/admin/whitelist")), session)
        .json(&payload)
        .map_err(|_| ApiError::Connection)?
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response).await.map(|_| ())
}

pub async fn delete_whitelist(session: &SessionStore, id: u32) -> Result<(), ApiError> {
    let url = endpoint(&format!("/admin/whitelist/{id}"));
    let response = authorized(Request::delete(&url), session)
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response).await.map(|_| ())
}

pub async fn get_users(session: &SessionStore) -> Result<Vec<UserAccount>, ApiError> {
    let response = authorized(Request::get(&endpoint("/admin/users")), session)
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response)
        .await?
        .json::<Vec<UserAccount>>()
        .await
        .map_err(|_| ApiError::Connection)
}

pub async fn delete_user(session: &SessionStore, id: u32) -> Result<(), ApiError> {
    let url = endpoint(&format!("/admin/users/{id}"));
    let response = authorized(Request::delete(&url), session)
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response).await.map(|_| ())
}

pub async fn reset_user_password(
    session: &SessionStore,
    id: u32,
) -> Result<ResetPasswordResponse, ApiError> {
    let url = endpoint(&format!("/admin/users/{id}/reset-password"));
    let response = authorized(Request::post(&url), session)
        .send()
        .await
        .map_err(|_| ApiError::Connection)?;
    check(response)
        .await?
        .json::<ResetPasswordResponse>()
        .await
        .map_err(|_| ApiError::Connection)
}

// --- Calculadora ---

/// `POST /api/calculate-distances/` with the per-field address values plus
/// the raw spreadsheet file, assembled into one multipart payload.
pub async fn calculate_distances(
    session: &SessionStore,
    address: &BaseAddress,
    file: &web_sys::File,
) -> Result<CalculationResponse, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Connection)?;
    for (name, value) in address.form_fields() {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::Connection)?;
    }
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Connection)?;

    let response = authorized(
        Request::post(&endpoint("/api/calculate-distances/")),
        session,
    )
    .body(form)
    .map_err(|_| ApiError::Connection)?
    .send()
    .await
    .map_err(|_| ApiError::Connection)?;
    check(response)
        .await?
        .json::<CalculationResponse>()
        .await
        .map_err(|_| ApiError::Connection)
}
