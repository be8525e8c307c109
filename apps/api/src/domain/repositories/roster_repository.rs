use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::teammate::{NewTeammate, Teammate, TeammateChanges, TeammateId};

/// Repository trait for the roster table
///
/// Defines the contract for persisting and retrieving teammates.
/// A lookup that matches nothing is an empty result, never an error;
/// callers decide what "nothing" means.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// All teammates, ordered by ID
    async fn list_all(&self) -> Result<Vec<Teammate>, RepositoryError>;

    /// Find a teammate by its ID
    async fn find_by_id(&self, id: TeammateId) -> Result<Option<Teammate>, RepositoryError>;

    /// Find all teammates wearing a jersey number
    async fn find_by_jersey(&self, jersey: i64) -> Result<Vec<Teammate>, RepositoryError>;

    /// Find all teammates with an exact name
    async fn find_by_name(&self, name: &str) -> Result<Vec<Teammate>, RepositoryError>;

    /// Insert a teammate and return it as stored, with its assigned ID
    async fn create(&self, teammate: &NewTeammate) -> Result<Teammate, RepositoryError>;

    /// Apply a partial update; `None` when no row has this ID
    async fn update(
        &self,
        id: TeammateId,
        changes: &TeammateChanges,
    ) -> Result<Option<Teammate>, RepositoryError>;

    /// Delete a teammate, returning the number of rows removed
    async fn remove(&self, id: TeammateId) -> Result<u64, RepositoryError>;
}
