// Service Errors
// Failures from loading the initial user list and from driving the draft form

use crate::form::UserField;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors raised while loading users from a source
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode users: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised by the form surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("No form is open")]
    NotOpen,

    #[error("Required fields are empty: {}", join_labels(.0))]
    MissingRequired(Vec<UserField>),
}

fn join_labels(fields: &[UserField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_message() {
        let err = FormError::MissingRequired(vec![UserField::Name, UserField::Email]);
        assert_eq!(err.to_string(), "Required fields are empty: Name, Email");
    }

    #[test]
    fn test_status_message() {
        let err = ServiceError::Status {
            url: "http://localhost/users".to_string(),
            status: 503,
        };
        assert_eq!(
            err.to_string(),
            "Request to http://localhost/users failed with status 503"
        );
    }
}
