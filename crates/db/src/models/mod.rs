//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts
//!
//! JSON field names are camelCase to match the public API contract; column
//! names stay snake_case.

pub mod booking;
pub mod experience;
