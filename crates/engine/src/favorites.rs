//! Favorites.
//!
//! A [`Favorite`] links a user to exactly one catalog entry, either a planet
//! or a character. In storage the target is two nullable foreign keys
//! (`planet_id`, `character_id`) guarded by a CHECK constraint; in the engine
//! it is the tagged [`FavoriteTarget`].
//!
//! The same target can be favorited any number of times by the same user.

use sea_orm::{ActiveValue, entity::prelude::*};

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteKind {
    Planet,
    Character,
}

impl FavoriteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Character => "character",
        }
    }
}

/// What a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    pub fn kind(self) -> FavoriteKind {
        match self {
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Character(_) => FavoriteKind::Character,
        }
    }

    fn planet_id(self) -> Option<i32> {
        match self {
            Self::Planet(id) => Some(id),
            Self::Character(_) => None,
        }
    }

    fn character_id(self) -> Option<i32> {
        match self {
            Self::Character(id) => Some(id),
            Self::Planet(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub target: FavoriteTarget,
}

/// A favorite resolved against its target, as listed for a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub id: i32,
    pub kind: FavoriteKind,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Planets,
    #[sea_orm(
        belongs_to = "super::characters::Entity",
        from = "Column::CharacterId",
        to = "super::characters::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Characters,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl Related<super::characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Characters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub(crate) fn for_target(user_id: i32, target: FavoriteTarget) -> Self {
        Self {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(target.planet_id()),
            character_id: ActiveValue::Set(target.character_id()),
        }
    }
}

impl TryFrom<Model> for Favorite {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let target = match (model.planet_id, model.character_id) {
            (Some(planet_id), None) => FavoriteTarget::Planet(planet_id),
            (None, Some(character_id)) => FavoriteTarget::Character(character_id),
            (Some(_), Some(_)) => {
                return Err(EngineError::InvalidRecord(format!(
                    "favorite {} points at both a planet and a character",
                    model.id
                )));
            }
            (None, None) => {
                return Err(EngineError::InvalidRecord(format!(
                    "favorite {} has no target",
                    model.id
                )));
            }
        };

        Ok(Self {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}
