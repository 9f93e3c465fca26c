use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{info, warn};
use uuid::Uuid;

use echowell_crypto::{hash_password, verify_password};
use echowell_db::models::NewUser;
use echowell_types::api::{LoginRequest, LoginResponse, MessageBody, RegisterRequest};

use crate::error::ApiError;
use crate::state::{AppState, with_db};

const REQUIRED_FIELDS: &str = "Name, email, and password are required.";

/// Well-formed `salt:hash` that no password is expected to match. Checked
/// when the email is unknown so both login failures cost one derivation.
const UNKNOWN_USER_HASH: &str = "00000000000000000000000000000000:\
    00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;

    if !req.has_required_fields() {
        return Err(ApiError::Validation(REQUIRED_FIELDS.into()));
    }

    let user_id = Uuid::new_v4();

    let created = with_db(&state, move |db| {
        let password_hash = hash_password(&req.password);
        db.create_user(&NewUser {
            id: &user_id.to_string(),
            name: &req.name,
            email: &req.email,
            password_hash: &password_hash,
            age: req.age,
            college_name: req.college_name.as_deref(),
            grades: req.grades.as_deref(),
        })
    })
    .await?;

    if !created {
        warn!("Registration rejected: email already registered");
        return Err(ApiError::EmailTaken);
    }

    info!("Registered user {}", user_id);
    Ok((
        StatusCode::CREATED,
        Json(MessageBody::new("User registered successfully.")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Only unparsable JSON is a client error; a body of the wrong shape is
    // just a failed lookup.
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::JsonSyntaxError(e)) => return Err(ApiError::Validation(e.body_text())),
        Err(_) => {
            warn!("Rejected login attempt");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let user = with_db(&state, move |db| {
        let Some(user) = db.get_user_by_email(&req.email)? else {
            verify_password(&req.password, UNKNOWN_USER_HASH);
            return Ok(None);
        };
        Ok(verify_password(&req.password, &user.password).then_some(user))
    })
    .await?;

    let Some(user) = user else {
        warn!("Rejected login attempt");
        return Err(ApiError::InvalidCredentials);
    };

    info!("User {} logged in", user.id);
    Ok(Json(LoginResponse {
        token: placeholder_token(&user.id),
    }))
}

/// Not a credential: nothing verifies it and it never expires. Clients get
/// it only to learn which user they logged in as.
fn placeholder_token(user_id: &str) -> String {
    format!("mock-token-for-user-{}", user_id)
}
