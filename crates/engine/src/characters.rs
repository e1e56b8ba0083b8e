//! The module contains the `Character` catalog entry.

use sea_orm::entity::{ActiveValue, prelude::*};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    /// Free text, e.g. `19BBY`.
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CharacterDraft {
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<Model> for Character {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            height: model.height,
            mass: model.mass,
            hair_color: model.hair_color,
            skin_color: model.skin_color,
            eye_color: model.eye_color,
            birth_year: model.birth_year,
            gender: model.gender,
        }
    }
}

impl From<CharacterDraft> for ActiveModel {
    fn from(draft: CharacterDraft) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(draft.name),
            height: ActiveValue::Set(draft.height),
            mass: ActiveValue::Set(draft.mass),
            hair_color: ActiveValue::Set(draft.hair_color),
            skin_color: ActiveValue::Set(draft.skin_color),
            eye_color: ActiveValue::Set(draft.eye_color),
            birth_year: ActiveValue::Set(draft.birth_year),
            gender: ActiveValue::Set(draft.gender),
        }
    }
}
