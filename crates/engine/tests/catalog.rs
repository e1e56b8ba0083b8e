use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{
    CharacterDraft, Engine, EngineError, FavoriteKind, FavoriteTarget, PlanetDraft,
};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build();
    (engine, db)
}

fn tatooine() -> PlanetDraft {
    PlanetDraft {
        name: "Tatooine".to_string(),
        diameter: Some(10465),
        rotation_period: Some(23),
        orbital_period: Some(304),
        gravity: Some("1 standard".to_string()),
        population: Some(200000),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        surface_water: Some(1),
    }
}

fn leia() -> CharacterDraft {
    CharacterDraft {
        name: "Leia Organa".to_string(),
        height: Some(150),
        mass: Some(49),
        hair_color: Some("brown".to_string()),
        skin_color: Some("light".to_string()),
        eye_color: Some("brown".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: Some("female".to_string()),
    }
}

async fn favorite_rows(db: &DatabaseConnection) -> i64 {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT COUNT(*) AS n FROM favorites",
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "n").unwrap()
}

#[tokio::test]
async fn planets_round_trip_through_the_catalog() {
    let (engine, _db) = engine_with_db().await;

    let planet = engine.new_planet(tatooine()).await.unwrap();
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, Some(200000));

    let listed = engine.list_planets().await.unwrap();
    assert_eq!(listed, vec![planet.clone()]);
    assert_eq!(engine.planet(planet.id).await.unwrap(), planet);
    assert_eq!(
        engine.planet(planet.id + 1).await.unwrap_err(),
        EngineError::KeyNotFound("planet".to_string())
    );
}

#[tokio::test]
async fn planet_without_name_is_rejected() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .new_planet(PlanetDraft {
            name: "  ".to_string(),
            ..tatooine()
        })
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::MissingField("name".to_string()));
    assert!(engine.list_planets().await.unwrap().is_empty());
}

#[tokio::test]
async fn characters_keep_optional_fields_empty() {
    let (engine, _db) = engine_with_db().await;

    let character = engine
        .new_character(CharacterDraft {
            name: "R2-D2".to_string(),
            gender: Some(" ".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(character.name, "R2-D2");
    assert_eq!(character.gender, None);
    assert_eq!(character.height, None);
    assert_eq!(engine.character(character.id).await.unwrap(), character);
    assert_eq!(engine.list_characters().await.unwrap().len(), 1);
}

#[tokio::test]
async fn favoriting_missing_planet_creates_nothing() {
    let (engine, db) = engine_with_db().await;
    let user = engine.create_user("luke@rebellion.org", "x").await.unwrap();

    let err = engine
        .add_favorite(user.id, FavoriteTarget::Planet(99))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("planet".to_string()));
    assert_eq!(favorite_rows(&db).await, 0);
}

#[tokio::test]
async fn favoriting_missing_character_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let user = engine.create_user("luke@rebellion.org", "x").await.unwrap();
    engine.new_planet(tatooine()).await.unwrap();

    let err = engine
        .add_favorite(user.id, FavoriteTarget::Character(1))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("character".to_string()));
}

#[tokio::test]
async fn same_planet_can_be_favorited_twice() {
    let (engine, db) = engine_with_db().await;
    let user = engine.create_user("luke@rebellion.org", "x").await.unwrap();
    let planet = engine.new_planet(tatooine()).await.unwrap();

    let first = engine
        .add_favorite(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();
    let second = engine
        .add_favorite(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(second.target, FavoriteTarget::Planet(planet.id));
    assert_eq!(favorite_rows(&db).await, 2);
    assert_eq!(engine.list_favorites(user.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn favorites_are_listed_with_kind_and_name() {
    let (engine, _db) = engine_with_db().await;
    let user = engine.create_user("luke@rebellion.org", "x").await.unwrap();
    let other = engine.create_user("vader@empire.gov", "y").await.unwrap();
    let planet = engine.new_planet(tatooine()).await.unwrap();
    let character = engine.new_character(leia()).await.unwrap();

    engine
        .add_favorite(user.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();
    engine
        .add_favorite(user.id, FavoriteTarget::Character(character.id))
        .await
        .unwrap();
    engine
        .add_favorite(other.id, FavoriteTarget::Planet(planet.id))
        .await
        .unwrap();

    let favorites = engine.list_favorites(user.id).await.unwrap();
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0].kind, FavoriteKind::Planet);
    assert_eq!(favorites[0].name, "Tatooine");
    assert_eq!(favorites[1].kind, FavoriteKind::Character);
    assert_eq!(favorites[1].name, "Leia Organa");

    assert!(engine.list_favorites(12345).await.unwrap().is_empty());
}

#[tokio::test]
async fn schema_rejects_favorite_with_two_targets() {
    let (engine, db) = engine_with_db().await;
    let user = engine.create_user("luke@rebellion.org", "x").await.unwrap();
    let planet = engine.new_planet(tatooine()).await.unwrap();
    let character = engine.new_character(leia()).await.unwrap();

    let result = db
        .execute(Statement::from_sql_and_values(
            db.get_database_backend(),
            "INSERT INTO favorites (user_id, planet_id, character_id) VALUES (?, ?, ?)",
            vec![user.id.into(), planet.id.into(), character.id.into()],
        ))
        .await;
    assert!(result.is_err());
    assert_eq!(favorite_rows(&db).await, 0);
}
