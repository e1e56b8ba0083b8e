use sea_orm::{QueryOrder, TransactionTrait, prelude::*};

use crate::{EngineError, Planet, PlanetDraft, ResultEngine, planets};

use super::{Engine, normalize_optional_text, normalize_required, with_tx};

impl Engine {
    /// Add a planet to the catalog.
    pub async fn new_planet(&self, draft: PlanetDraft) -> ResultEngine<Planet> {
        let draft = PlanetDraft {
            name: normalize_required(&draft.name, "name")?,
            gravity: normalize_optional_text(draft.gravity),
            climate: normalize_optional_text(draft.climate),
            terrain: normalize_optional_text(draft.terrain),
            ..draft
        };

        with_tx!(self, |db_tx| {
            let model = planets::ActiveModel::from(draft).insert(&db_tx).await?;
            Ok(Planet::from(model))
        })
    }

    pub async fn list_planets(&self) -> ResultEngine<Vec<Planet>> {
        let planets = planets::Entity::find()
            .order_by_asc(planets::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Planet::from)
            .collect();
        Ok(planets)
    }

    pub async fn planet(&self, id: i32) -> ResultEngine<Planet> {
        planets::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Planet::from)
            .ok_or_else(|| EngineError::KeyNotFound("planet".to_string()))
    }
}
