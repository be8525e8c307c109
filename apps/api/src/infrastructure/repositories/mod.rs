// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod sqlite_roster_repository;

pub use sqlite_roster_repository::SqliteRosterRepository;
