//! Signup, login and user lookup endpoints.

use api_types::user::{Credentials, Me, TokenIssued, UserView};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use engine::User;

use crate::{
    ServerError,
    extract::{JsonBody, PathParam},
    required,
    server::ServerState,
};

fn map_user(user: User) -> UserView {
    UserView {
        id: user.id,
        email: user.email,
        token: user.token,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, ServerError> {
    let users = state
        .engine
        .list_users()
        .await?
        .into_iter()
        .map(map_user)
        .collect();
    Ok(Json(users))
}

/// Handle signup requests
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<Credentials>,
) -> Result<(StatusCode, Json<UserView>), ServerError> {
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let user = state.engine.create_user(&email, &password).await?;
    Ok((StatusCode::CREATED, Json(map_user(user))))
}

pub async fn get(
    State(state): State<ServerState>,
    PathParam(user_id): PathParam<i32>,
) -> Result<Json<UserView>, ServerError> {
    let user = state.engine.user(user_id).await?;
    Ok(Json(map_user(user)))
}

/// Handle login requests. A mismatch is a 401, never a token.
pub async fn token(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<Credentials>,
) -> Result<Json<TokenIssued>, ServerError> {
    let email = required(payload.email, "email")?;
    let password = required(payload.password, "password")?;

    let session = state.engine.issue_token(&email, &password).await?;
    Ok(Json(TokenIssued {
        token: session.token,
        user: map_user(session.user),
    }))
}

pub async fn me(Extension(user): Extension<User>) -> Json<Me> {
    Json(Me {
        user: map_user(user),
    })
}
