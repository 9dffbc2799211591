use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::entity::Entity;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: `{id}`")]
    NotFound { kind: &'static str, id: String },
    #[error("duplicate {kind} id: `{id}`")]
    Duplicate { kind: &'static str, id: String },
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Data-access capability for one entity collection.
///
/// State containers receive a repository instead of reaching for shared
/// module-level data, so the in-memory store can later be swapped for a
/// remote one without touching the containers.
pub trait Repository<E: Entity> {
    /// All entities in insertion order.
    fn list(&self) -> Vec<E>;

    fn get(&self, id: &str) -> Option<E>;

    /// Append a new entity. Rejects an id that is already present.
    fn insert(&mut self, entity: E) -> Result<(), StoreError>;

    /// Overwrite the stored entity with the same id, keeping its position.
    fn replace(&mut self, entity: E) -> Result<(), StoreError>;

    /// Remove and return the entity with `id`, if present.
    fn remove(&mut self, id: &str) -> Option<E>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

// ---------------------------------------------------------------------------
// InMemoryRepository
// ---------------------------------------------------------------------------

/// `Vec`-backed repository. Lost when dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    items: Vec<E>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Seed from an initial collection. Later duplicates of an id are dropped.
    pub fn seeded(items: impl IntoIterator<Item = E>) -> Self {
        let mut repo = Self::new();
        for item in items {
            if let Err(e) = repo.insert(item) {
                debug!(error = %e, "skipping duplicate seed entity");
            }
        }
        repo
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    fn list(&self) -> Vec<E> {
        self.items.clone()
    }

    fn get(&self, id: &str) -> Option<E> {
        self.items.iter().find(|e| e.id() == id).cloned()
    }

    fn insert(&mut self, entity: E) -> Result<(), StoreError> {
        if self.items.iter().any(|e| e.id() == entity.id()) {
            return Err(StoreError::Duplicate {
                kind: E::KIND,
                id: entity.id().to_string(),
            });
        }
        self.items.push(entity);
        Ok(())
    }

    fn replace(&mut self, entity: E) -> Result<(), StoreError> {
        match self.items.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                kind: E::KIND,
                id: entity.id().to_string(),
            }),
        }
    }

    fn remove(&mut self, id: &str) -> Option<E> {
        let pos = self.items.iter().position(|e| e.id() == id)?;
        Some(self.items.remove(pos))
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ---------------------------------------------------------------------------
// SharedRepository
// ---------------------------------------------------------------------------

/// Cloneable handle over one [`InMemoryRepository`].
///
/// Every clone reads and writes the same collection, so several state
/// containers (the deal form and the deal board, say) observe each other's
/// mutations.
#[derive(Debug)]
pub struct SharedRepository<E> {
    inner: Arc<Mutex<InMemoryRepository<E>>>,
}

impl<E> Clone for SharedRepository<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: Entity> SharedRepository<E> {
    pub fn new(repo: InMemoryRepository<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(repo)),
        }
    }

    pub fn seeded(items: impl IntoIterator<Item = E>) -> Self {
        Self::new(InMemoryRepository::seeded(items))
    }

    fn store(&self) -> MutexGuard<'_, InMemoryRepository<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Entity> Default for SharedRepository<E> {
    fn default() -> Self {
        Self::new(InMemoryRepository::new())
    }
}

impl<E: Entity> Repository<E> for SharedRepository<E> {
    fn list(&self) -> Vec<E> {
        self.store().list()
    }

    fn get(&self, id: &str) -> Option<E> {
        self.store().get(id)
    }

    fn insert(&mut self, entity: E) -> Result<(), StoreError> {
        self.store().insert(entity)
    }

    fn replace(&mut self, entity: E) -> Result<(), StoreError> {
        self.store().replace(entity)
    }

    fn remove(&mut self, id: &str) -> Option<E> {
        self.store().remove(id)
    }

    fn len(&self) -> usize {
        self.store().len()
    }
}
