use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StateStore;
use crate::error::StoreError;
use crate::models::State;

/// In-process store, lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new(state: State) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn get(&self) -> Result<State, StoreError> {
        Ok(self.state.read().await.clone())
    }

    async fn put(&self, state: &State) -> Result<(), StoreError> {
        *self.state.write().await = state.clone();
        Ok(())
    }
}
