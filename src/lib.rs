pub mod models;
pub mod rest;
pub mod service;
pub mod store;

use service::TaskService;

/// Shared application state handed to every request handler.
pub struct AppContext {
    pub service: TaskService,
}

impl AppContext {
    pub fn new(service: TaskService) -> Self {
        Self { service }
    }
}
