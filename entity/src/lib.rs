//! Domain records stored by the platform repositories.

pub mod employees;
pub mod roles;

use uuid::Uuid;

pub use employees::Employee;
pub use roles::Role;

/// A record addressed by a unique identifier assigned when it is first stored.
pub trait BaseEntity: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    fn set_id(&mut self, id: Uuid);
}
