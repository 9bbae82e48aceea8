//! Infrastructure layer: concrete implementations of the domain traits.

pub mod broadcast;
pub mod repository;
