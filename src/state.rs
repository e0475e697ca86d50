use std::sync::Arc;

use crate::db::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }
}
