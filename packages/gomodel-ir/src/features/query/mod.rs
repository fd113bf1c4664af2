//! Model queries
//!
//! Lookup facade over a built [`ModelGraph`](crate::features::entity_building::ModelGraph).

pub mod application;
pub mod domain;

pub use application::ModelQuery;
pub use domain::{EntityKind, EntityRef};
