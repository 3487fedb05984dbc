//! Category model and request payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Category: root of the catalog hierarchy, has many genres.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload. Fields are optional at the serde level so that a
/// missing field surfaces as a field-level validation message rather than a
/// body deserialization fault.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategoryPayload {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, message = "The name field is required.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "The description field is required."),
        length(min = 1, message = "The description field is required.")
    )]
    pub description: Option<String>,
}

impl CategoryPayload {
    /// Unwraps the validated fields. Only call after `validate()` succeeded.
    pub fn into_fields(self) -> AppResult<(String, String)> {
        match (self.name, self.description) {
            (Some(name), Some(description)) => Ok((name, description)),
            _ => Err(AppError::Internal(
                "category payload field missing after validation".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_requires_name_and_description() {
        let payload = CategoryPayload {
            name: None,
            description: Some("Fiction books".to_string()),
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(!errors.field_errors().contains_key("description"));
    }

    #[test]
    fn payload_rejects_empty_strings() {
        let payload = CategoryPayload {
            name: Some(String::new()),
            description: Some("Fiction books".to_string()),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn valid_payload_yields_fields() {
        let payload = CategoryPayload {
            name: Some("Fiction".to_string()),
            description: Some("Fiction books".to_string()),
        };
        assert!(payload.validate().is_ok());
        let (name, description) = payload.into_fields().unwrap();
        assert_eq!(name, "Fiction");
        assert_eq!(description, "Fiction books");
    }
}
