// session.rs

use crate::catalog::{CategoryId, OptionId};
use crate::composer::ComposedPrompt;
use crate::error::Result;
use crate::selection::{CharacterState, Selection};
use crate::store::SelectionStore;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// A selection store shared between tasks. Every operation takes the session lock
/// once, so a reset or a composition never observes a half-applied mutation.
#[derive(Debug, Clone)]
pub struct SharedSession {
    store: Arc<Mutex<SelectionStore>>,
}

impl SharedSession {
    pub fn new(store: SelectionStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    // For callers that need several operations applied under one lock.
    pub async fn lock(&self) -> MutexGuard<'_, SelectionStore> {
        self.store.lock().await
    }

    pub async fn set_selection(&self, category: CategoryId, option_id: Option<OptionId>) -> Result<()> {
        self.store.lock().await.set_selection(category, option_id)
    }

    pub async fn set_custom_prompt(&self, category: CategoryId, text: impl Into<String>) -> Result<()> {
        self.store.lock().await.set_custom_prompt(category, text)
    }

    pub async fn clear_custom_prompt(&self, category: CategoryId) -> Result<()> {
        self.store.lock().await.clear_custom_prompt(category)
    }

    pub async fn set_character_name(&self, name: impl Into<String>) {
        self.store.lock().await.set_character_name(name);
    }

    pub async fn reset_character(&self) {
        self.store.lock().await.reset_character();
    }

    pub async fn selection(&self, category: CategoryId) -> Result<Selection> {
        self.store.lock().await.selection(category).cloned()
    }

    pub async fn snapshot(&self) -> CharacterState {
        self.store.lock().await.state().clone()
    }

    pub async fn compose(&self) -> ComposedPrompt {
        self.store.lock().await.compose()
    }
}
