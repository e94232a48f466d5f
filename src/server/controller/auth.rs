//! Login, logout and registration for customers, plus the admin login form.
//!
//! Page handlers answer with JSON page state; successful form posts answer with a
//! redirect, matching a classic server-rendered flow.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        page::FormPageDto,
        user::{LoginFormDto, RegisterFormDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{RegisterError, RegisterParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

const LOGIN_FAILED: &str = "Invalid username or password!";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginParams {
    /// Local path to return to after logging in
    pub next: Option<String>,
}

/// Keeps `next` only when it is a local absolute path.
fn redirect_target(next: Option<String>) -> String {
    match next {
        Some(next)
            if next.starts_with('/') && !next.starts_with("//") && !next.starts_with("/\\") =>
        {
            next
        }
        _ => "/".to_string(),
    }
}

fn form_page(err_msg: Option<&str>) -> Response {
    (
        StatusCode::OK,
        Json(FormPageDto {
            err_msg: err_msg.map(str::to_string),
        }),
    )
        .into_response()
}

async fn is_logged_in(state: &AppState, session: &Session) -> Result<bool, AppError> {
    Ok(AuthGuard::new(&state.db, session)
        .current_user()
        .await?
        .is_some())
}

/// Admin login form.
///
/// Logs the user in when the credentials match and redirects to `/admin` either way;
/// the admin index shows whether a user is logged in.
#[utoipa::path(
    post,
    path = "/admin-login",
    tag = AUTH_TAG,
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to /admin"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    if let Some(user) = user_service
        .authenticate(&form.username, &form.password)
        .await?
    {
        AuthSession::new(&session).set_user_id(user.id).await?;
        tracing::info!("User {} logged in to admin", user.id);
    }

    Ok(Redirect::to("/admin"))
}

/// Login page. Redirects to `/` when already logged in.
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Login page state", body = FormPageDto),
        (status = 303, description = "Already logged in, redirect to /")
    ),
)]
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if is_logged_in(&state, &session).await? {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(form_page(None))
}

/// Customer login form.
///
/// On success stores the user in the session and redirects to `next` (local paths
/// only) or `/`. On failure returns the login page state with an error message.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    params(LoginParams),
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login failed", body = FormPageDto),
        (status = 303, description = "Logged in, redirect to next or /"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
    Form(form): Form<LoginFormDto>,
) -> Result<Response, AppError> {
    if is_logged_in(&state, &session).await? {
        return Ok(Redirect::to("/").into_response());
    }

    let user_service = UserService::new(&state.db);

    let Some(user) = user_service
        .authenticate(&form.username, &form.password)
        .await?
    else {
        return Ok(form_page(Some(LOGIN_FAILED)));
    };

    AuthSession::new(&session).set_user_id(user.id).await?;
    tracing::info!("User {} logged in", user.id);

    Ok(Redirect::to(&redirect_target(params.next)).into_response())
}

/// Clears the session and redirects to `/`.
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Redirect to /")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/")
}

/// Registration page. Redirects to `/` when already logged in.
#[utoipa::path(
    get,
    path = "/register",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Registration page state", body = FormPageDto),
        (status = 303, description = "Already logged in, redirect to /")
    ),
)]
pub async fn register_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if is_logged_in(&state, &session).await? {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(form_page(None))
}

/// Customer registration form.
///
/// Creates a customer account and redirects to `/login`. Rejections are returned as
/// registration page state with a message.
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body(content = RegisterFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Registration rejected", body = FormPageDto),
        (status = 303, description = "Registered, redirect to /login")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterFormDto>,
) -> Result<Response, AppError> {
    if is_logged_in(&state, &session).await? {
        return Ok(Redirect::to("/").into_response());
    }

    let Some(params) = RegisterParams::from_dto(form) else {
        return Ok(form_page(Some(RegisterError::InvalidData.message())));
    };

    match UserService::new(&state.db).register(params).await {
        Ok(user) => {
            tracing::info!("Registered user {}", user.id);
            Ok(Redirect::to("/login").into_response())
        }
        Err(err) => Ok(form_page(Some(err.message()))),
    }
}

/// The logged-in user.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "No user logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = AuthGuard::new(&state.db, &session).current_user().await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
