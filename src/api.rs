pub mod handlers;
pub mod middleware;
pub mod response;

use std::sync::{Arc, Mutex};

use axum::{Router, routing::get};

use crate::store::ContactStore;

/// Shared handle to the one contact store of the process.
///
/// Handlers validate the payload first, then hold the lock for the whole
/// store read/mutate step, so store operations never interleave.
#[derive(Clone, Default)]
pub struct AppState {
    store: Arc<Mutex<ContactStore>>,
}

impl AppState {
    pub fn new(store: ContactStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    pub fn store(&self) -> &Arc<Mutex<ContactStore>> {
        &self.store
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contacts",
            get(handlers::list_contacts)
                .post(handlers::add_contact)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::remove_contact)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
        .layer(axum::middleware::from_fn(middleware::request_log))
        .with_state(state)
}
