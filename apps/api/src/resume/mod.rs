// Resume lifecycle: one active document per user, permissive autosave,
// strict validation wherever data leaves the system.

pub mod handlers;
pub mod schema;
pub mod store;
