use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::BaseEntity;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            description: description.into(),
        }
    }
}

impl BaseEntity for Role {
    fn id(&self) -> Uuid {
        self.id
    }

    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
}
