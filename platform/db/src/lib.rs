//! Storage primitives. Everything lives in process memory for now; the
//! [`Repository`] trait is the seam a durable backend would plug into.

mod memory;

use async_trait::async_trait;
use entity::BaseEntity;
use uuid::Uuid;

pub use memory::InMemoryRepository;

/// CRUD capability set over one entity type.
///
/// Lookups never fail: a missing record is reported as `None` / `false`.
#[async_trait]
pub trait Repository<T: BaseEntity>: Send + Sync {
    async fn get_all(&self) -> Vec<T>;

    async fn get_by_id(&self, id: Uuid) -> Option<T>;

    /// Assigns a fresh identifier to `item` and stores it.
    async fn create(&self, item: T) -> T;

    /// Replaces the record sharing `item`'s identifier. Returns `None` when no
    /// such record exists.
    async fn update(&self, item: T) -> Option<T>;

    /// Removes the record sharing `entity`'s identifier.
    async fn delete(&self, entity: &T) -> bool;
}
