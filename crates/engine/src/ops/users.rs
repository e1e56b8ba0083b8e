use sea_orm::{ActiveValue, QueryFilter, QueryOrder, SqlErr, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, User, users};

use super::{Engine, normalize_required, require_non_blank, with_tx};

/// A unique index firing on insert means another request took `key` between
/// our lookup and the write.
fn existing_on_conflict(err: DbErr, key: &str) -> EngineError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::ExistingKey(key.to_string()),
        _ => EngineError::Database(err),
    }
}

impl Engine {
    /// Register a new user.
    ///
    /// The email is trimmed and must be unique. The password is stored as
    /// given; it only has to contain something other than whitespace. New users are active and have no
    /// token until their first login.
    pub async fn create_user(&self, email: &str, password: &str) -> ResultEngine<User> {
        let email = normalize_required(email, "email")?;
        require_non_blank(password, "password")?;

        with_tx!(self, |db_tx| {
            let exists = users::Entity::find()
                .filter(users::Column::Email.eq(email.as_str()))
                .one(&db_tx)
                .await?
                .is_some();
            if exists {
                return Err(EngineError::ExistingKey(email));
            }

            let model = users::ActiveModel {
                id: ActiveValue::NotSet,
                email: ActiveValue::Set(email.clone()),
                password: ActiveValue::Set(password.to_string()),
                is_active: ActiveValue::Set(true),
                token: ActiveValue::Set(None),
            }
            .insert(&db_tx)
            .await
            .map_err(|err| existing_on_conflict(err, &email))?;

            Ok(User::from(model))
        })
    }

    /// Return every user, oldest first.
    pub async fn list_users(&self) -> ResultEngine<Vec<User>> {
        let users = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(User::from)
            .collect();
        Ok(users)
    }

    pub async fn user(&self, id: i32) -> ResultEngine<User> {
        users::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(User::from)
            .ok_or_else(|| EngineError::KeyNotFound("user".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;
    use sea_orm::{ConnectionTrait, Database, Statement};

    use super::*;

    #[tokio::test]
    async fn unique_violation_becomes_existing_key() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();

        let insert = Statement::from_string(
            db.get_database_backend(),
            "INSERT INTO users (email, password, is_active) VALUES ('rey@jakku.net', 'x', 1)",
        );
        db.execute(insert.clone()).await.unwrap();
        let err = db.execute(insert).await.unwrap_err();

        assert_eq!(
            existing_on_conflict(err, "rey@jakku.net"),
            EngineError::ExistingKey("rey@jakku.net".to_string())
        );
    }

    #[test]
    fn other_database_errors_pass_through() {
        let err = existing_on_conflict(DbErr::Custom("boom".to_string()), "rey@jakku.net");
        assert!(matches!(err, EngineError::Database(_)));
    }
}
