//! Favorites endpoints. All of them sit behind the bearer token guard.

use api_types::{
    Created,
    favorite::{FavoriteKind, FavoriteView},
};
use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
};
use engine::{FavoriteEntry, FavoriteTarget, User};

use crate::{ServerError, extract::PathParam, server::ServerState};

fn map_favorite(entry: FavoriteEntry) -> FavoriteView {
    FavoriteView {
        id: entry.id,
        kind: match entry.kind {
            engine::FavoriteKind::Planet => FavoriteKind::Planet,
            engine::FavoriteKind::Character => FavoriteKind::Character,
        },
        name: entry.name,
    }
}

async fn add(
    state: ServerState,
    user: User,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let favorite = state.engine.add_favorite(user.id, target).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: format!("{} added to favorites", target.kind().as_str()),
            id: favorite.id,
        }),
    ))
}

pub async fn add_planet(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    PathParam(planet_id): PathParam<i32>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    add(state, user, FavoriteTarget::Planet(planet_id)).await
}

pub async fn add_character(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
    PathParam(character_id): PathParam<i32>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    add(state, user, FavoriteTarget::Character(character_id)).await
}

pub async fn list(
    Extension(user): Extension<User>,
    State(state): State<ServerState>,
) -> Result<Json<Vec<FavoriteView>>, ServerError> {
    let favorites = state
        .engine
        .list_favorites(user.id)
        .await?
        .into_iter()
        .map(map_favorite)
        .collect();
    Ok(Json(favorites))
}
