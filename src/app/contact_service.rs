//! The contact service.
//!
//! Sits between the HTTP layer and the file store. It is responsible for:
//! 1.  Running field validation and the duplicate-name check before writes.
//! 2.  Turning "no such contact" into a typed error the routes map to 404.
//! 3.  Logging every mutation that reaches the store.

use crate::domain::contact::{Contact, ContactForm, ValidationError};
use crate::storage::ContactStore;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed ({} field error(s))", .0.len())]
    Validation(Vec<ValidationError>),

    #[error("contact '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct ContactService {
    store: ContactStore,
}

impl ContactService {
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// Opens (and if needed initializes) the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        Ok(Self::new(ContactStore::open(path)?))
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn list(&self) -> ServiceResult<Vec<Contact>> {
        Ok(self.store.load_all()?)
    }

    pub fn get(&self, name: &str) -> ServiceResult<Contact> {
        self.store
            .find(name)?
            .ok_or_else(|| ServiceError::NotFound(name.to_string()))
    }

    pub fn create(&self, form: ContactForm) -> ServiceResult<Contact> {
        let mut errors = form.validate();
        if self.store.duplicate_exists(&form.name)? {
            errors.push(ValidationError::duplicate_name(&form.name));
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let contact = form.into_contact();
        self.store.add(contact.clone())?;
        log::info!("Added contact '{}'", contact.name);
        Ok(contact)
    }

    /// Replaces `old_name` with the submitted contact. Renaming onto another
    /// existing contact is rejected; keeping the same name is not a duplicate.
    pub fn update(&self, old_name: &str, form: ContactForm) -> ServiceResult<Contact> {
        if !self.store.duplicate_exists(old_name)? {
            return Err(ServiceError::NotFound(old_name.to_string()));
        }

        let mut errors = form.validate();
        if form.name != old_name && self.store.duplicate_exists(&form.name)? {
            errors.push(ValidationError::duplicate_name(&form.name));
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        let contact = form.into_contact();
        self.store.update(old_name, contact.clone())?;
        if contact.name == old_name {
            log::info!("Updated contact '{}'", old_name);
        } else {
            log::info!("Updated contact '{}' (renamed to '{}')", old_name, contact.name);
        }
        Ok(contact)
    }

    pub fn delete(&self, name: &str) -> ServiceResult<()> {
        if !self.store.duplicate_exists(name)? {
            return Err(ServiceError::NotFound(name.to_string()));
        }
        self.store.delete(name)?;
        log::info!("Deleted contact '{}'", name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_service() -> (ContactService, PathBuf) {
        let dir = std::env::temp_dir().join(format!("contact-service-{}", uuid::Uuid::new_v4()));
        let service = ContactService::open(dir.join("contacts.json")).unwrap();
        (service, dir)
    }

    fn form(name: &str, email: &str, phone: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            old_name: None,
        }
    }

    fn valid(name: &str) -> ContactForm {
        form(name, "someone@example.com", "081234567890")
    }

    fn validation_messages(err: ServiceError) -> Vec<String> {
        match err {
            ServiceError::Validation(errors) => errors.into_iter().map(|e| e.message).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_then_list() {
        let (service, dir) = temp_service();
        let created = service.create(valid("Ani")).unwrap();
        assert_eq!(service.list().unwrap(), vec![created]);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn create_rejects_duplicate_name() {
        let (service, dir) = temp_service();
        service.create(valid("Ani")).unwrap();
        let err = service.create(valid("Ani")).unwrap_err();
        assert_eq!(validation_messages(err), vec!["Contact name already in list!"]);
        assert_eq!(service.list().unwrap().len(), 1);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn create_rejects_bad_fields_without_writing() {
        let (service, dir) = temp_service();
        let err = service.create(form("Ani", "not-an-email", "12")).unwrap_err();
        assert_eq!(
            validation_messages(err),
            vec!["Email is not valid!", "Phone number is not valid!"]
        );
        assert!(service.list().unwrap().is_empty());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn update_allows_keeping_the_same_name() {
        let (service, dir) = temp_service();
        service.create(valid("Ani")).unwrap();
        let updated = service
            .update("Ani", form("Ani", "ani@example.org", "081298765432"))
            .unwrap();
        assert_eq!(service.get("Ani").unwrap(), updated);
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn update_rejects_rename_onto_another_contact() {
        let (service, dir) = temp_service();
        service.create(valid("Ani")).unwrap();
        service.create(valid("Budi")).unwrap();
        let err = service.update("Ani", valid("Budi")).unwrap_err();
        assert_eq!(validation_messages(err), vec!["Contact name already in list!"]);
        assert!(service.get("Ani").is_ok());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn update_renames_and_appends() {
        let (service, dir) = temp_service();
        service.create(valid("Ani")).unwrap();
        service.create(valid("Budi")).unwrap();
        service.update("Ani", valid("Anita")).unwrap();
        let names: Vec<String> = service.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Budi", "Anita"]);
        assert!(matches!(service.get("Ani"), Err(ServiceError::NotFound(_))));
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn update_unknown_contact_is_not_found() {
        let (service, dir) = temp_service();
        assert!(matches!(
            service.update("Nobody", valid("Nobody")),
            Err(ServiceError::NotFound(name)) if name == "Nobody"
        ));
        assert!(service.list().unwrap().is_empty());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let (service, dir) = temp_service();
        service.create(valid("Ani")).unwrap();
        service.create(valid("Budi")).unwrap();
        service.delete("Ani").unwrap();
        assert_eq!(service.list().unwrap(), vec![valid("Budi").into_contact()]);
        assert!(matches!(service.delete("Ani"), Err(ServiceError::NotFound(_))));
        std::fs::remove_dir_all(dir).ok();
    }
}
