use thiserror::Error;

/// Failures raised by a roster repository adapter
///
/// "No row matched" is never an error at this level; callers learn about it
/// from an empty lookup or a zero row count.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store rejected the write because a column constraint failed
    ///
    /// The driver's message is logged by the adapter, not carried here.
    #[error("constraint violation")]
    Constraint,

    /// A row written a moment ago could not be read back
    #[error("teammate {0} vanished after write")]
    Missing(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcomes of roster operations that are not a successful result
///
/// The HTTP layer maps each variant onto a status code; the `Display`
/// output is the message returned to clients.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("The roster is currently empty. Add some teammates.")]
    EmptyRoster,

    #[error("Unable to find the teammate with the ID of {0}")]
    NotFound(String),

    #[error("No teammates match the given filter.")]
    NoMatches,

    #[error("The provided request was invalid: {0}. Ensure the JSON body reflects the schema and try again.")]
    Validation(String),

    #[error("Unable to use the identifier {0}. The identifier is invalid.")]
    InvalidIdentifier(String),

    #[error("Internal server error.")]
    Internal(#[source] RepositoryError),
}

impl RosterError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}

impl From<RepositoryError> for RosterError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Constraint => Self::validation(CONSTRAINT_REASON),
            other => Self::Internal(other),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;

const CONSTRAINT_REASON: &str = "a field does not satisfy the roster schema";
