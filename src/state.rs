use crate::storage::Store;
use crate::suggest::TaskSuggester;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub suggester: Arc<dyn TaskSuggester>,
}

impl AppState {
    pub fn new(store: Store, suggester: Arc<dyn TaskSuggester>) -> Self {
        Self {
            store: Arc::new(store),
            suggester,
        }
    }
}
