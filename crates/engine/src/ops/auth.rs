use sea_orm::{ActiveValue, QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    AuthFailure, Authentication, EngineError, ResultEngine, Session, User, bearer_credential,
    users,
};

use super::{Engine, normalize_required, require_non_blank, with_tx};

/// 128 random bits rendered as 32 lowercase hex characters.
fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}

impl Engine {
    /// Log a user in.
    ///
    /// Blank fields are rejected like at signup. Otherwise email and password
    /// must both match exactly. On success a fresh token replaces whatever
    /// token the user held before, so older tokens stop authenticating.
    pub async fn issue_token(&self, email: &str, password: &str) -> ResultEngine<Session> {
        let email = normalize_required(email, "email")?;
        require_non_blank(password, "password")?;
        with_tx!(self, |db_tx| {
            let model = users::Entity::find()
                .filter(users::Column::Email.eq(email.as_str()))
                .filter(users::Column::Password.eq(password))
                .one(&db_tx)
                .await?
                .ok_or(EngineError::InvalidCredentials)?;

            let token = new_token();
            let mut active: users::ActiveModel = model.into();
            active.token = ActiveValue::Set(Some(token.clone()));
            let model = active.update(&db_tx).await?;

            Ok(Session {
                token,
                user: User::from(model),
            })
        })
    }

    /// Resolve an `Authorization` header value to a user.
    ///
    /// A missing or malformed header is reported as
    /// [`AuthFailure::MissingToken`], an unknown credential as
    /// [`AuthFailure::InvalidToken`]. Only database failures are errors.
    pub async fn authenticate(&self, header: Option<&str>) -> ResultEngine<Authentication> {
        let Some(token) = header.and_then(bearer_credential) else {
            return Ok(Authentication::Unauthenticated(AuthFailure::MissingToken));
        };

        let user = users::Entity::find()
            .filter(users::Column::Token.eq(token))
            .one(&self.database)
            .await?;

        Ok(match user {
            Some(model) => Authentication::Authenticated(User::from(model)),
            None => Authentication::Unauthenticated(AuthFailure::InvalidToken),
        })
    }
}
