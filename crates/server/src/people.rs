//! Character catalog endpoints, served under `/people`.

use api_types::{
    Created,
    character::{CharacterNew, CharacterView},
};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use engine::{Character, CharacterDraft};

use crate::{
    ServerError,
    extract::{JsonBody, PathParam},
    required,
    server::ServerState,
};

fn map_character(character: Character) -> CharacterView {
    CharacterView {
        id: character.id,
        name: character.name,
        height: character.height,
        mass: character.mass,
        hair_color: character.hair_color,
        skin_color: character.skin_color,
        eye_color: character.eye_color,
        birth_year: character.birth_year,
        gender: character.gender,
    }
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CharacterView>>, ServerError> {
    let characters = state
        .engine
        .list_characters()
        .await?
        .into_iter()
        .map(map_character)
        .collect();
    Ok(Json(characters))
}

/// Handle requests for adding a character. Replies with a confirmation
/// rather than the full record.
pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<CharacterNew>,
) -> Result<(StatusCode, Json<Created>), ServerError> {
    let draft = CharacterDraft {
        name: required(payload.name, "name")?,
        height: payload.height,
        mass: payload.mass,
        hair_color: payload.hair_color,
        skin_color: payload.skin_color,
        eye_color: payload.eye_color,
        birth_year: payload.birth_year,
        gender: payload.gender,
    };

    let character = state.engine.new_character(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "character added".to_string(),
            id: character.id,
        }),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    PathParam(character_id): PathParam<i32>,
) -> Result<Json<CharacterView>, ServerError> {
    let character = state.engine.character(character_id).await?;
    Ok(Json(map_character(character)))
}
