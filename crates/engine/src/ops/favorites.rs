use std::collections::HashMap;

use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, Favorite, FavoriteEntry, FavoriteTarget, ResultEngine, characters, favorites,
    planets,
};

use super::{Engine, with_tx};

impl Engine {
    /// Mark a planet or a character as favorite for `user_id`.
    ///
    /// The target must exist. Repeated calls with the same target create
    /// repeated favorites.
    pub async fn add_favorite(&self, user_id: i32, target: FavoriteTarget) -> ResultEngine<Favorite> {
        with_tx!(self, |db_tx| {
            let exists = match target {
                FavoriteTarget::Planet(id) => {
                    planets::Entity::find_by_id(id).one(&db_tx).await?.is_some()
                }
                FavoriteTarget::Character(id) => characters::Entity::find_by_id(id)
                    .one(&db_tx)
                    .await?
                    .is_some(),
            };
            if !exists {
                return Err(EngineError::KeyNotFound(target.kind().as_str().to_string()));
            }

            let model = favorites::ActiveModel::for_target(user_id, target)
                .insert(&db_tx)
                .await?;
            Favorite::try_from(model)
        })
    }

    /// List the favorites of `user_id`, oldest first, with the name of each
    /// target.
    pub async fn list_favorites(&self, user_id: i32) -> ResultEngine<Vec<FavoriteEntry>> {
        let favorites = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .order_by_asc(favorites::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Favorite::try_from)
            .collect::<ResultEngine<Vec<_>>>()?;

        let mut planet_ids = Vec::new();
        let mut character_ids = Vec::new();
        for favorite in &favorites {
            match favorite.target {
                FavoriteTarget::Planet(id) => planet_ids.push(id),
                FavoriteTarget::Character(id) => character_ids.push(id),
            }
        }

        let planet_names: HashMap<i32, String> = if planet_ids.is_empty() {
            HashMap::new()
        } else {
            planets::Entity::find()
                .filter(planets::Column::Id.is_in(planet_ids))
                .all(&self.database)
                .await?
                .into_iter()
                .map(|planet| (planet.id, planet.name))
                .collect()
        };
        let character_names: HashMap<i32, String> = if character_ids.is_empty() {
            HashMap::new()
        } else {
            characters::Entity::find()
                .filter(characters::Column::Id.is_in(character_ids))
                .all(&self.database)
                .await?
                .into_iter()
                .map(|character| (character.id, character.name))
                .collect()
        };

        favorites
            .into_iter()
            .map(|favorite| -> ResultEngine<FavoriteEntry> {
                let name = match favorite.target {
                    FavoriteTarget::Planet(id) => planet_names.get(&id),
                    FavoriteTarget::Character(id) => character_names.get(&id),
                }
                .cloned()
                .ok_or_else(|| {
                    EngineError::InvalidRecord(format!(
                        "favorite {} points at a missing {}",
                        favorite.id,
                        favorite.target.kind().as_str()
                    ))
                })?;

                Ok(FavoriteEntry {
                    id: favorite.id,
                    kind: favorite.target.kind(),
                    name,
                })
            })
            .collect()
    }
}
