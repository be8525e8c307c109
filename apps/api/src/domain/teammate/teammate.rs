use super::value_objects::{TeammateChanges, TeammateId};

/// A single member of the roster
///
/// # Invariants
/// - `id` is assigned by the store and never changes
/// - `name` is never blank
///
/// # Example
/// ```
/// use roster_api::domain::teammate::{Teammate, TeammateId};
///
/// let id = TeammateId::new(1).expect("positive id");
/// let teammate = Teammate::from_persistence(id, "Alex".to_string(), Some(7));
///
/// assert_eq!(teammate.name(), "Alex");
/// assert_eq!(teammate.jersey(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teammate {
    id: TeammateId,
    name: String,
    jersey: Option<i64>,
}

impl Teammate {
    pub fn id(&self) -> TeammateId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jersey(&self) -> Option<i64> {
        self.jersey
    }

    /// Applies a partial update, leaving absent fields untouched
    pub fn apply(&mut self, changes: &TeammateChanges) {
        if let Some(name) = changes.name() {
            self.name = name.to_string();
        }
        if let Some(jersey) = changes.jersey() {
            self.jersey = jersey;
        }
    }

    /// Reconstructs a Teammate from a stored row
    ///
    /// Only to be used by repository implementations; stored rows were
    /// validated on the way in.
    pub fn from_persistence(id: TeammateId, name: String, jersey: Option<i64>) -> Self {
        Self { id, name, jersey }
    }
}
