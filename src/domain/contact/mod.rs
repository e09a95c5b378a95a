//! Domain model for the contact book.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod validation;

pub use validation::ValidationError;

/// A single entry of the contact book. `name` is the primary key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Submitted add/edit form.
///
/// Every field defaults to an empty string so that a missing field is reported
/// by validation instead of being rejected by the extractor.
#[derive(Deserialize, Serialize, Debug, Clone, Default, ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Name of the record being edited (edit form only).
    #[serde(default, rename = "oldName", skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,
}

impl ContactForm {
    /// Field checks that don't need the store: non-blank name, email, phone.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", validation::NAME_REQUIRED, &self.name));
        }
        if !validation::is_email(&self.email) {
            errors.push(ValidationError::new("email", validation::EMAIL_INVALID, &self.email));
        }
        if !validation::is_mobile_phone_id(&self.phone) {
            errors.push(ValidationError::new("phone", validation::PHONE_INVALID, &self.phone));
        }
        errors
    }

    pub fn into_contact(self) -> Contact {
        Contact {
            name: self.name,
            email: self.email,
            phone: self.phone,
        }
    }
}

impl From<&Contact> for ContactForm {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            old_name: Some(contact.name.clone()),
        }
    }
}
