use serde::Deserialize;
use serde_with::rust::double_option;
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::RosterError;

/// Store-assigned identifier of a teammate
///
/// Always a positive integer. Parsed from the raw path segment so that the
/// service, not the router, decides how a malformed identifier is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeammateId(i64);

impl TeammateId {
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for TeammateId {
    type Err = RosterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| RosterError::InvalidIdentifier(raw.to_string()))
    }
}

impl fmt::Display for TeammateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Teammate attributes as submitted by a client
///
/// Unknown keys are rejected so that a typo never silently drops a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeammateFields {
    pub name: Option<String>,
    /// Jersey number (None = absent, Some(None) = null, Some(n) = set)
    #[serde(default, with = "double_option")]
    pub jersey: Option<Option<i64>>,
}

/// A validated teammate ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeammate {
    name: String,
    jersey: Option<i64>,
}

impl NewTeammate {
    /// Validates submitted fields for insertion
    ///
    /// # Business Rules
    /// - `name` is required and must not be blank
    /// - `name` is stored exactly as submitted
    /// - An explicit null `jersey` is the same as leaving it out
    pub fn from_fields(fields: TeammateFields) -> Result<Self, RosterError> {
        let name = fields
            .name
            .ok_or_else(|| RosterError::validation("name is required"))?;

        Ok(Self {
            name: check_name(name)?,
            jersey: fields.jersey.flatten(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jersey(&self) -> Option<i64> {
        self.jersey
    }
}

/// A validated partial update; absent fields keep their stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeammateChanges {
    name: Option<String>,
    jersey: Option<Option<i64>>,
}

impl TeammateChanges {
    /// Validates submitted fields for an update
    ///
    /// # Business Rules
    /// - At least one field must be present
    /// - A provided `name` must not be blank
    /// - A null `jersey` clears the stored number
    pub fn from_fields(fields: TeammateFields) -> Result<Self, RosterError> {
        if fields.name.is_none() && fields.jersey.is_none() {
            return Err(RosterError::validation("no fields to update"));
        }

        let name = fields.name.map(check_name).transpose()?;

        Ok(Self {
            name,
            jersey: fields.jersey,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `None` leaves the jersey alone, `Some(None)` clears it
    pub fn jersey(&self) -> Option<Option<i64>> {
        self.jersey
    }
}

/// Optional lookup criteria for the roster listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterFilter {
    pub name: Option<String>,
    pub jersey: Option<i64>,
}

impl RosterFilter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.jersey.is_none()
    }
}

fn check_name(name: String) -> Result<String, RosterError> {
    if name.trim().is_empty() {
        return Err(RosterError::validation("name cannot be empty"));
    }
    Ok(name)
}
