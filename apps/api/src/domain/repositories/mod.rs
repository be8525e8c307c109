pub mod roster_repository;

pub use roster_repository::RosterRepository;
