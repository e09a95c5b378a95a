pub mod router;
pub mod types;
pub mod views;
pub mod handlers {
    pub mod api;
    pub mod common;
    pub mod contacts;
    pub mod health;
    pub mod pages;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
