//! Project collection catalog entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project collection as listed by the configuration server catalog: a
/// named administrative grouping with its own identity scope, addressed by
/// its instance id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRef {
    /// Instance id of the collection.
    pub id: Uuid,
    /// Display name of the collection.
    pub name: String,
}

impl CollectionRef {
    /// Create a new collection reference.
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether this collection appears in the operator's ignore set.
    /// Ignored collections are skipped by every operation.
    pub fn is_ignored(&self, ignored: &[String]) -> bool {
        ignored.iter().any(|name| name == &self.name)
    }
}
