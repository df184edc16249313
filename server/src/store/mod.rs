//! Persistent state store and the serialized read-modify-write handle over it

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::State;

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key-value store holding the whole application state as one document.
///
/// Each call is atomic: readers never observe a partially written document.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self) -> Result<State, StoreError>;
    async fn put(&self, state: &State) -> Result<(), StoreError>;
}

/// Shared handle through which every service touches the state.
///
/// User actions and poll cycles both mutate the document, so all mutations go
/// through [`StateHandle::update`], which holds a lock across get and put.
#[derive(Clone)]
pub struct StateHandle {
    store: Arc<dyn StateStore>,
    write_lock: Arc<Mutex<()>>,
}

impl StateHandle {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    /// Latest persisted state
    pub async fn snapshot(&self) -> Result<State, StoreError> {
        self.store.get().await
    }

    /// Applies `apply` to the latest state and persists the result.
    ///
    /// Nothing is written when `apply` fails.
    pub async fn update<T, E, F>(&self, apply: F) -> Result<T, E>
    where
        F: FnOnce(&mut State) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut state = self.store.get().await?;
        let value = apply(&mut state)?;
        self.store.put(&state).await?;
        Ok(value)
    }
}
