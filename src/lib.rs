use std::sync::Arc;

pub mod calculator;
pub mod config;
pub mod controller;
pub mod doc;
pub mod error;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod route;
pub mod schema;
pub mod store;

use store::TodoStore;

// Struct representing the application state
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: impl TodoStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
