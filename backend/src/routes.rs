use crate::config::Config;
use crate::error::ApiError;
use crate::extract::CurrentUser;
use crate::state::SharedState;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Json, Router};
use calc_core::activities::{ActivityRoster, SignupOutcome};
use calc_core::auth::{Token, User};
use calc_core::expression;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: SharedState, config: &Config) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(get_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route("/token", post(login_for_access_token))
        .route("/users/me", get(read_users_me))
        .route("/calculate", post(calculate_expression))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

async fn get_activities(State(state): State<SharedState>) -> Json<ActivityRoster> {
    Json(state.roster().clone())
}

#[derive(Debug, Deserialize)]
struct SignupParams {
    email: String,
}

async fn signup_for_activity(
    State(state): State<SharedState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(activity_name) = path?;
    let Query(params) = query?;
    let outcome = state.roster_mut().signup(&activity_name, &params.email);

    match outcome {
        Ok(SignupOutcome::Registered) => {
            info!("Signed up {} for {}", params.email, activity_name);
            Ok(Json(json!({
                "message": format!("Signed up {} for {}", params.email, activity_name)
            })))
        }
        Ok(SignupOutcome::AlreadyRegistered) => {
            info!("{} already registered for {}", params.email, activity_name);
            Ok(Json(json!({
                "error": "Student already registered for this activity."
            })))
        }
        Err(e) => {
            warn!("Signup rejected: {}", e);
            Err(e.into())
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginData {
    username: String,
    password: String,
}

async fn login_for_access_token(
    State(state): State<SharedState>,
    body: Result<Json<LoginData>, JsonRejection>,
) -> Result<Json<Token>, ApiError> {
    let Json(login) = body?;
    let result = state.sessions_mut().login(&login.username, &login.password);

    match result {
        Ok(token) => {
            info!("Issued token for {}", login.username);
            Ok(Json(token))
        }
        Err(e) => {
            warn!("Login failed for {}: {}", login.username, e);
            Err(e.into())
        }
    }
}

async fn read_users_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

#[derive(Debug, Deserialize)]
struct CalculateParams {
    expression: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    expression: String,
    result: f64,
}

async fn calculate_expression(
    CurrentUser(user): CurrentUser,
    query: Result<Query<CalculateParams>, QueryRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Query(params) = query?;

    match expression::evaluate(&params.expression) {
        Ok(result) if !result.is_finite() => {
            warn!("Non-finite result for '{}': {}", params.expression, result);
            Err(ApiError::NonFiniteResult(result))
        }
        Ok(result) => {
            info!("{} calculated '{}' = {}", user.username, params.expression, result);
            Ok(Json(CalculateResponse {
                expression: params.expression,
                result,
            }))
        }
        Err(e) => {
            if e.is_undefined_result() {
                warn!("Undefined result for '{}': {}", params.expression, e);
            } else {
                warn!("Malformed expression '{}': {}", params.expression, e);
            }
            Err(e.into())
        }
    }
}
