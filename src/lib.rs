pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::contact_service::{ContactService, ServiceError};
pub use domain::contact::{Contact, ContactForm, ValidationError};
pub use storage::ContactStore;
