//! The module contains the `Planet` catalog entry.

use sea_orm::entity::{ActiveValue, prelude::*};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
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

/// A planet. Planets are never modified after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

/// Input for a new planet. Only `name` is mandatory.
#[derive(Clone, Debug, Default)]
pub struct PlanetDraft {
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

impl From<Model> for Planet {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            diameter: model.diameter,
            rotation_period: model.rotation_period,
            orbital_period: model.orbital_period,
            gravity: model.gravity,
            population: model.population,
            climate: model.climate,
            terrain: model.terrain,
            surface_water: model.surface_water,
        }
    }
}

impl From<PlanetDraft> for ActiveModel {
    fn from(draft: PlanetDraft) -> Self {
        Self {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(draft.name),
            diameter: ActiveValue::Set(draft.diameter),
            rotation_period: ActiveValue::Set(draft.rotation_period),
            orbital_period: ActiveValue::Set(draft.orbital_period),
            gravity: ActiveValue::Set(draft.gravity),
            population: ActiveValue::Set(draft.population),
            climate: ActiveValue::Set(draft.climate),
            terrain: ActiveValue::Set(draft.terrain),
            surface_water: ActiveValue::Set(draft.surface_water),
        }
    }
}
