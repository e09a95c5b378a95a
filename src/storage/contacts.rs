//! File-backed contact store.
//!
//! The whole collection lives in one JSON array. Every read parses the file and
//! every mutation rewrites it in full; there is no index and no write-ahead log.

use crate::domain::contact::Contact;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Binds the store to `path`, creating the parent directory and an empty `[]`
    /// file when they do not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating store directory {}", dir.display()))?;
            }
        }
        if !path.exists() {
            fs::write(&path, "[]")
                .with_context(|| format!("initializing store file {}", path.display()))?;
            log::info!("Created empty contact store at {}", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the whole store. Fails if the file is missing or corrupt.
    pub fn load_all(&self) -> anyhow::Result<Vec<Contact>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading contact store {}", self.path.display()))?;
        let contacts = serde_json::from_str(&raw)
            .with_context(|| format!("parsing contact store {}", self.path.display()))?;
        Ok(contacts)
    }

    pub fn find(&self, name: &str) -> anyhow::Result<Option<Contact>> {
        Ok(self.load_all()?.into_iter().find(|c| c.name == name))
    }

    pub fn duplicate_exists(&self, name: &str) -> anyhow::Result<bool> {
        Ok(self.load_all()?.iter().any(|c| c.name == name))
    }

    pub fn add(&self, contact: Contact) -> anyhow::Result<()> {
        let mut contacts = self.load_all()?;
        contacts.push(contact);
        self.save(&contacts)
    }

    /// Removes every record named `name`.
    pub fn delete(&self, name: &str) -> anyhow::Result<()> {
        let mut contacts = self.load_all()?;
        contacts.retain(|c| c.name != name);
        self.save(&contacts)
    }

    /// Drops `old_name` and appends `contact` at the end of the list.
    pub fn update(&self, old_name: &str, contact: Contact) -> anyhow::Result<()> {
        let mut contacts = self.load_all()?;
        contacts.retain(|c| c.name != old_name);
        contacts.push(contact);
        self.save(&contacts)
    }

    fn save(&self, contacts: &[Contact]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(contacts)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing contact store {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (ContactStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!("contact-store-{}", uuid::Uuid::new_v4()));
        let store = ContactStore::open(dir.join("contacts.json")).unwrap();
        (store, dir)
    }

    fn contact(name: &str) -> Contact {
        Contact {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "081234567890".to_string(),
        }
    }

    #[test]
    fn open_creates_empty_array_file() {
        let (store, dir) = temp_store();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load_all().unwrap().is_empty());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn open_keeps_existing_contents() {
        let (store, dir) = temp_store();
        store.add(contact("Ani")).unwrap();
        let reopened = ContactStore::open(store.path()).unwrap();
        assert_eq!(reopened.load_all().unwrap(), vec![contact("Ani")]);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn add_then_load_returns_contact() {
        let (store, dir) = temp_store();
        store.add(contact("Ani")).unwrap();
        store.add(contact("Budi")).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![contact("Ani"), contact("Budi")]);
        assert_eq!(store.find("Budi").unwrap(), Some(contact("Budi")));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn find_unknown_returns_none() {
        let (store, dir) = temp_store();
        store.add(contact("Ani")).unwrap();
        assert_eq!(store.find("Nobody").unwrap(), None);
        assert_eq!(store.find("ani").unwrap(), None);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn duplicate_exists_matches_exact_name() {
        let (store, dir) = temp_store();
        store.add(contact("Ani")).unwrap();
        assert!(store.duplicate_exists("Ani").unwrap());
        assert!(!store.duplicate_exists("Budi").unwrap());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn delete_removes_only_the_named_contact() {
        let (store, dir) = temp_store();
        for name in ["Ani", "Budi", "Citra"] {
            store.add(contact(name)).unwrap();
        }
        store.delete("Budi").unwrap();
        assert_eq!(store.load_all().unwrap(), vec![contact("Ani"), contact("Citra")]);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn update_replaces_and_moves_to_end() {
        let (store, dir) = temp_store();
        for name in ["Ani", "Budi", "Citra"] {
            store.add(contact(name)).unwrap();
        }
        store.update("Ani", contact("Anita")).unwrap();
        assert_eq!(
            store.load_all().unwrap(),
            vec![contact("Budi"), contact("Citra"), contact("Anita")]
        );
        assert_eq!(store.find("Ani").unwrap(), None);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn store_file_is_a_plain_json_array() {
        let (store, dir) = temp_store();
        store.add(contact("Ani")).unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{ "name": "Ani", "email": "ani@example.com", "phone": "081234567890" }])
        );
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn corrupt_file_fails_to_load() {
        let (store, dir) = temp_store();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load_all().is_err());
        assert!(store.add(contact("Ani")).is_err());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_file_fails_to_load() {
        let (store, dir) = temp_store();
        fs::remove_file(store.path()).unwrap();
        assert!(store.load_all().is_err());
        fs::remove_dir_all(dir).ok();
    }
}
