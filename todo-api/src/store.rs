//! Volatile, process-lifetime storage for todo items.
//!
//! # Design
//! `TodoStore` is a clonable handle around `Arc<RwLock<..>>`, shared as
//! router state. Writers take the exclusive lock, so inserts, replacements
//! and removals are serialised. Id assignment happens under the same lock as
//! the insert it belongs to.
//!
//! Items live in a `BTreeMap`. Ids are handed out by a monotonic counter
//! starting at 1 and are never reused, so key order is insertion order.

use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use crate::model::{TodoId, TodoItem};

#[derive(Debug)]
struct Inner {
    items: BTreeMap<TodoId, TodoItem>,
    next_id: TodoId,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    inner: Arc<RwLock<Inner>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored item, in insertion order.
    pub async fn list_all(&self) -> Vec<TodoItem> {
        self.inner.read().await.items.values().cloned().collect()
    }

    pub async fn find_by_id(&self, id: TodoId) -> Option<TodoItem> {
        self.inner.read().await.items.get(&id).cloned()
    }

    pub async fn exists_by_id(&self, id: TodoId) -> bool {
        self.inner.read().await.items.contains_key(&id)
    }

    /// Stores `item` under a freshly assigned id, ignoring whatever id it
    /// carried, and returns the stored copy.
    pub async fn insert(&self, item: TodoItem) -> TodoItem {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let stored = item.with_id(id);
        inner.items.insert(id, stored.clone());
        stored
    }

    /// Overwrites the item sharing `item.id`. Returns `false` and stores
    /// nothing when no such item exists.
    pub async fn replace(&self, item: TodoItem) -> bool {
        let mut inner = self.inner.write().await;
        match inner.items.get_mut(&item.id) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub async fn remove_by_id(&self, id: TodoId) -> Option<TodoItem> {
        self.inner.write().await.items.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.items.is_empty()
    }
}
