//! Storage records and wire schemas for every entity.
//!
//! Each entity module holds the sea-orm `Model`, its `XCreate` / `XUpdate`
//! input schemas and the [`persistable::Persistable`] impl that lets the
//! generic database service handle it.

pub mod errors;
pub mod db;
pub mod validation;
pub mod persistable;
pub mod user;
pub mod group;
pub mod item;
pub mod membership;

pub use persistable::Persistable;
pub use validation::Validate;
