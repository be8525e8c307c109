//! Roster service - business operations over the roster repository

use std::sync::Arc;

use crate::domain::errors::{RosterError, RosterResult};
use crate::domain::repositories::RosterRepository;
use crate::domain::teammate::{
    NewTeammate, RosterFilter, Teammate, TeammateChanges, TeammateFields, TeammateId,
};

/// Business-facing roster operations
///
/// Owns the translation of repository results into domain outcomes:
/// empty lookups become `NotFound`/`EmptyRoster`, constraint failures become
/// `Validation`, everything else unexpected becomes `Internal`.
pub struct RosterService {
    repo: Arc<dyn RosterRepository>,
}

impl RosterService {
    pub fn new(repo: Arc<dyn RosterRepository>) -> Self {
        Self { repo }
    }

    /// The whole roster; an empty roster is reported as `EmptyRoster`
    pub async fn get_full_roster(&self) -> RosterResult<Vec<Teammate>> {
        let teammates = self.repo.list_all().await?;
        if teammates.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        Ok(teammates)
    }

    /// Teammates matching every criterion in `filter`
    ///
    /// Without criteria this is [`RosterService::get_full_roster`].
    pub async fn search_roster(&self, filter: &RosterFilter) -> RosterResult<Vec<Teammate>> {
        if filter.is_empty() {
            return self.get_full_roster().await;
        }

        let candidates = match (&filter.name, filter.jersey) {
            (Some(name), _) => self.repo.find_by_name(name).await?,
            (None, Some(jersey)) => self.repo.find_by_jersey(jersey).await?,
            (None, None) => Vec::new(),
        };

        let matches: Vec<Teammate> = candidates
            .into_iter()
            .filter(|t| filter.jersey.map_or(true, |jersey| t.jersey() == Some(jersey)))
            .collect();

        if matches.is_empty() {
            return Err(RosterError::NoMatches);
        }
        Ok(matches)
    }

    /// A single teammate by its raw identifier
    ///
    /// A malformed identifier cannot match any row, so it is reported as
    /// `NotFound` like any other missing teammate.
    pub async fn get_teammate_info(&self, raw_id: &str) -> RosterResult<Teammate> {
        let id: TeammateId = raw_id
            .parse()
            .map_err(|_| RosterError::NotFound(raw_id.to_string()))?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    pub async fn add_new_teammate(&self, fields: TeammateFields) -> RosterResult<Teammate> {
        let new = NewTeammate::from_fields(fields)?;
        let teammate = self.repo.create(&new).await?;

        tracing::info!(id = %teammate.id(), name = teammate.name(), "Teammate added to roster");
        Ok(teammate)
    }

    /// Partially updates a teammate and returns the stored result
    ///
    /// Updating an identifier with no row is `NotFound`.
    pub async fn update_teammate_info(
        &self,
        raw_id: &str,
        fields: TeammateFields,
    ) -> RosterResult<Teammate> {
        let id: TeammateId = raw_id.parse()?;
        let changes = TeammateChanges::from_fields(fields)?;

        let teammate = self
            .repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        tracing::info!(id = %id, "Teammate info updated");
        Ok(teammate)
    }

    /// Removes a teammate
    ///
    /// An identifier that is malformed or matches no row is `InvalidIdentifier`.
    pub async fn remove_teammate(&self, raw_id: &str) -> RosterResult<()> {
        let id: TeammateId = raw_id.parse()?;

        let removed = self.repo.remove(id).await?;
        if removed == 0 {
            return Err(RosterError::InvalidIdentifier(raw_id.to_string()));
        }

        tracing::info!(id = %id, "Teammate removed from roster");
        Ok(())
    }
}
