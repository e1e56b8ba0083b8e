use serde::{Deserialize, Serialize};

/// Generic confirmation or error body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

/// Confirmation for a newly created row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

pub mod user {
    use super::*;

    /// Body of `POST /users` and `POST /token`.
    ///
    /// Both fields are optional at the JSON level so that a missing field is
    /// reported as a 400 with a message instead of a deserialization rejection.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct Credentials {
        pub email: Option<String>,
        pub password: Option<String>,
    }

    /// Public view of a user. The password is never serialized.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserView {
        pub id: i32,
        pub email: String,
        pub token: Option<String>,
    }

    /// Response of a successful `POST /token`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TokenIssued {
        pub token: String,
        pub user: UserView,
    }

    /// Response of `GET /user/me`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Me {
        pub user: UserView,
    }
}

pub mod planet {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PlanetNew {
        pub name: Option<String>,
        pub diameter: Option<i32>,
        pub rotation_period: Option<i32>,
        pub orbital_period: Option<i32>,
        pub gravity: Option<String>,
        pub population: Option<i64>,
        pub climate: Option<String>,
        pub terrain: Option<String>,
        pub surface_water: Option<i32>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct PlanetView {
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
}

pub mod character {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CharacterNew {
        pub name: Option<String>,
        pub height: Option<i32>,
        pub mass: Option<i32>,
        pub hair_color: Option<String>,
        pub skin_color: Option<String>,
        pub eye_color: Option<String>,
        pub birth_year: Option<String>,
        pub gender: Option<String>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CharacterView {
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
}

pub mod favorite {
    use super::*;

    /// Which kind of entity a favorite points at.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum FavoriteKind {
        Planet,
        Character,
    }

    /// One entry of `GET /users/favorites`.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FavoriteView {
        pub id: i32,
        #[serde(rename = "type")]
        pub kind: FavoriteKind,
        pub name: String,
    }
}
