pub mod json;
pub mod panic;

pub use json::RosterJson;
pub use panic::handle_panic;
