use crate::db::error::DbError;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// ServiceError represents errors that can occur in the service layer of the application.
/// Callers discriminate by variant; the message is built from the structured fields.
///
/// Wraps lower-level errors so that every layer adds a short description of what it was doing.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record matched, e.g. `player with id 42 not found`. `value` holds the raw value;
    /// anything other than an id is quoted when displayed.
    #[error("{resource} with {attribute} {} not found", shown(.attribute, .value))]
    NotFound {
        resource: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// A unique key is already taken
    #[error("{0}")]
    Conflict(String),

    #[error("{context}")]
    Database {
        context: String,
        #[source]
        source: DbError,
    },
}

impl ServiceError {
    pub fn not_found(resource: &'static str, attribute: &'static str, value: impl ToString) -> Self {
        ServiceError::NotFound {
            resource,
            attribute,
            value: value.to_string(),
        }
    }

    pub fn database(context: impl Into<String>, source: DbError) -> Self {
        ServiceError::Database {
            context: context.into(),
            source,
        }
    }

    /// Maps a lookup failure: no matching row becomes `NotFound`, anything else stays a store error.
    pub fn from_lookup(
        source: DbError,
        resource: &'static str,
        attribute: &'static str,
        value: impl ToString,
    ) -> Self {
        if source.is_not_found() {
            return Self::not_found(resource, attribute, value);
        }

        let value = value.to_string();
        Self::database(
            format!("getting {resource} with {attribute} {}", shown(attribute, &value)),
            source,
        )
    }
}

fn shown(attribute: &str, value: &str) -> String {
    if attribute == "id" {
        value.to_string()
    } else {
        format!("'{value}'")
    }
}

/// Renders an error and its sources as `outer: inner: root`, skipping sources whose
/// message is already part of the text.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut cur = err.source();

    while let Some(e) = cur {
        let part = e.to_string();
        if !msg.ends_with(&part) {
            msg.push_str(": ");
            msg.push_str(&part);
        }
        cur = e.source();
    }

    msg
}
