use std::{any::type_name, collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entity::BaseEntity;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::Repository;

/// Keyed in-memory store shared by every clone of the handle.
pub struct InMemoryRepository<T> {
    inner: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: BaseEntity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from records that already carry their identifiers.
    pub fn with_data(data: impl IntoIterator<Item = T>) -> Self {
        let map = data.into_iter().map(|item| (item.id(), item)).collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

#[async_trait]
impl<T: BaseEntity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Vec<T> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Option<T> {
        let map = self.inner.read().await;
        map.get(&id).cloned()
    }

    async fn create(&self, mut item: T) -> T {
        let mut map = self.inner.write().await;
        let mut id = Uuid::new_v4();
        while map.contains_key(&id) {
            id = Uuid::new_v4();
        }
        item.set_id(id);
        map.insert(id, item.clone());
        debug!(entity = type_name::<T>(), %id, "created");
        item
    }

    async fn update(&self, item: T) -> Option<T> {
        let mut map = self.inner.write().await;
        let id = item.id();
        let slot = map.get_mut(&id)?;
        *slot = item.clone();
        debug!(entity = type_name::<T>(), %id, "updated");
        Some(item)
    }

    async fn delete(&self, entity: &T) -> bool {
        let mut map = self.inner.write().await;
        let id = entity.id();
        let removed = map.remove(&id).is_some();
        debug!(entity = type_name::<T>(), %id, removed, "deleted");
        removed
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use entity::Role;

    use super::*;

    fn role(name: &str) -> Role {
        Role::new(name, format!("{name} description"))
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let repo = InMemoryRepository::<Role>::new();
        let mut ids = HashSet::new();
        for i in 0..32 {
            let stored = repo.create(role(&format!("role-{i}"))).await;
            assert!(!stored.id.is_nil());
            assert!(ids.insert(stored.id));
        }
        assert_eq!(repo.len().await, 32);
    }

    #[tokio::test]
    async fn get_by_id_returns_created_record() {
        let repo = InMemoryRepository::<Role>::new();
        let stored = repo.create(role("Admin")).await;
        assert_eq!(repo.get_by_id(stored.id).await, Some(stored));
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_none() {
        let repo = InMemoryRepository::<Role>::with_data([role("Admin")]);
        assert_eq!(repo.get_by_id(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn update_is_visible_to_later_reads() {
        let repo = InMemoryRepository::<Role>::new();
        let mut stored = repo.create(role("Admin")).await;
        stored.description = "Full access".into();

        let updated = repo.update(stored.clone()).await;
        assert_eq!(updated.as_ref(), Some(&stored));

        let fetched = repo.get_by_id(stored.id).await.unwrap();
        assert_eq!(fetched.description, "Full access");
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_none() {
        let repo = InMemoryRepository::<Role>::new();
        let mut ghost = role("Ghost");
        ghost.id = Uuid::new_v4();
        assert_eq!(repo.update(ghost).await, None);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryRepository::<Role>::new();
        let keep = repo.create(role("Keep")).await;
        let gone = repo.create(role("Gone")).await;

        assert!(repo.delete(&gone).await);
        assert_eq!(repo.get_by_id(gone.id).await, None);
        assert_eq!(repo.get_all().await, vec![keep]);
        assert!(!repo.delete(&gone).await);
    }

    #[tokio::test]
    async fn with_data_keeps_given_ids() {
        let mut seeded = role("Seeded");
        seeded.id = Uuid::new_v4();
        let repo = InMemoryRepository::with_data([seeded.clone()]);
        assert_eq!(repo.get_by_id(seeded.id).await, Some(seeded));
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryRepository::<Role>::new();
        let handle = repo.clone();
        let stored = handle.create(role("Shared")).await;
        assert_eq!(repo.get_by_id(stored.id).await, Some(stored));
    }
}
