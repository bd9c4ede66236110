//! `larder-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod date;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use date::parse_calendar_date;
pub use entity::Entity;
pub use error::{DomainError, DomainResult, InvalidInputKind};
pub use id::ItemId;
pub use value_object::ValueObject;
