//! Planet catalog endpoints

use api_types::planet::{PlanetNew, PlanetView};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use engine::{Planet, PlanetDraft};

use crate::{
    ServerError,
    extract::{JsonBody, PathParam},
    required,
    server::ServerState,
};

fn map_planet(planet: Planet) -> PlanetView {
    PlanetView {
        id: planet.id,
        name: planet.name,
        diameter: planet.diameter,
        rotation_period: planet.rotation_period,
        orbital_period: planet.orbital_period,
        gravity: planet.gravity,
        population: planet.population,
        climate: planet.climate,
        terrain: planet.terrain,
        surface_water: planet.surface_water,
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PlanetView>>, ServerError> {
    let planets = state
        .engine
        .list_planets()
        .await?
        .into_iter()
        .map(map_planet)
        .collect();
    Ok(Json(planets))
}

pub async fn create(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<PlanetNew>,
) -> Result<(StatusCode, Json<PlanetView>), ServerError> {
    let draft = PlanetDraft {
        name: required(payload.name, "name")?,
        diameter: payload.diameter,
        rotation_period: payload.rotation_period,
        orbital_period: payload.orbital_period,
        gravity: payload.gravity,
        population: payload.population,
        climate: payload.climate,
        terrain: payload.terrain,
        surface_water: payload.surface_water,
    };

    let planet = state.engine.new_planet(draft).await?;
    Ok((StatusCode::CREATED, Json(map_planet(planet))))
}

pub async fn get(
    State(state): State<ServerState>,
    PathParam(planet_id): PathParam<i32>,
) -> Result<Json<PlanetView>, ServerError> {
    let planet = state.engine.planet(planet_id).await?;
    Ok(Json(map_planet(planet)))
}
