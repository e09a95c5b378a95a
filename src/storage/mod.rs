pub mod contacts;

pub use contacts::ContactStore;
