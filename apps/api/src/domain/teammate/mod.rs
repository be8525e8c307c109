// Teammate domain module
// Contains the teammate aggregate and its value objects

#![allow(clippy::module_inception)]

pub mod teammate;
pub mod value_objects;

pub use teammate::Teammate;
pub use value_objects::{NewTeammate, RosterFilter, TeammateChanges, TeammateFields, TeammateId};
