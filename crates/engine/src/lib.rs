//! Data access layer for Holonet.
//!
//! The [`Engine`] owns the database connection and implements every
//! operation the HTTP server exposes: signup and login, the planet and
//! character catalogs, favorites, and the bearer token check.

pub use auth::{AuthFailure, Authentication, bearer_credential};
pub use characters::{Character, CharacterDraft};
pub use error::EngineError;
pub use favorites::{Favorite, FavoriteEntry, FavoriteKind, FavoriteTarget};
pub use ops::{Engine, EngineBuilder};
pub use planets::{Planet, PlanetDraft};
pub use users::{Session, User};

mod auth;
mod characters;
mod error;
mod favorites;
mod ops;
mod planets;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
