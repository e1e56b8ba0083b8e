use sea_orm::{QueryOrder, TransactionTrait, prelude::*};

use crate::{Character, CharacterDraft, EngineError, ResultEngine, characters};

use super::{Engine, normalize_optional_text, normalize_required, with_tx};

impl Engine {
    /// Add a character to the catalog.
    pub async fn new_character(&self, draft: CharacterDraft) -> ResultEngine<Character> {
        let draft = CharacterDraft {
            name: normalize_required(&draft.name, "name")?,
            hair_color: normalize_optional_text(draft.hair_color),
            skin_color: normalize_optional_text(draft.skin_color),
            eye_color: normalize_optional_text(draft.eye_color),
            birth_year: normalize_optional_text(draft.birth_year),
            gender: normalize_optional_text(draft.gender),
            ..draft
        };

        with_tx!(self, |db_tx| {
            let model = characters::ActiveModel::from(draft)
                .insert(&db_tx)
                .await?;
            Ok(Character::from(model))
        })
    }

    pub async fn list_characters(&self) -> ResultEngine<Vec<Character>> {
        let characters = characters::Entity::find()
            .order_by_asc(characters::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Character::from)
            .collect();
        Ok(characters)
    }

    pub async fn character(&self, id: i32) -> ResultEngine<Character> {
        characters::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Character::from)
            .ok_or_else(|| EngineError::KeyNotFound("character".to_string()))
    }
}
