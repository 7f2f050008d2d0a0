//! Shared fixtures for the test suite: sample entities and an in-memory
//! store double implementing the [`Connection`](crate::orm::connection::Connection) boundary.
