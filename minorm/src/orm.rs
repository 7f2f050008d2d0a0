//! This module exposes all the types of the mapping engine.

pub mod connection;
pub mod query;
pub mod repository;
pub mod schema;
pub mod table;
pub mod types;
pub mod value;
