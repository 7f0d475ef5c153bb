//! Domain types and pure logic shared by the database and API crates.

pub mod admin_gate;
pub mod dates;
pub mod error;
pub mod project;
pub mod roles;
pub mod types;
