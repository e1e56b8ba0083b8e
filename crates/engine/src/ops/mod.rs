use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod auth;
mod characters;
mod favorites;
mod planets;
mod users;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

fn normalize_required(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::MissingField(label.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Like [`normalize_required`] but keeps the value untouched; for secrets
/// that are compared byte for byte.
fn require_non_blank(value: &str, label: &str) -> ResultEngine<()> {
    if value.trim().is_empty() {
        return Err(EngineError::MissingField(label.to_string()));
    }
    Ok(())
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_secret_is_blank() {
        assert_eq!(
            require_non_blank("   ", "password"),
            Err(EngineError::MissingField("password".to_string()))
        );
        assert_eq!(require_non_blank(" pw ", "password"), Ok(()));
    }

    #[test]
    fn required_values_are_trimmed() {
        assert_eq!(normalize_required("  Tatooine ", "name").unwrap(), "Tatooine");
    }

    #[test]
    fn blank_required_value_names_the_field() {
        assert_eq!(
            normalize_required(" \t", "email"),
            Err(EngineError::MissingField("email".to_string()))
        );
    }

    #[test]
    fn blank_optional_text_becomes_none() {
        assert_eq!(normalize_optional_text(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional_text(Some(" arid ".to_string())),
            Some("arid".to_string())
        );
        assert_eq!(normalize_optional_text(None), None);
    }
}
