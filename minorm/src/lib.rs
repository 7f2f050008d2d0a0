#![crate_name = "minorm"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # minorm
//!
//! A minimal object-relational mapper: a struct whose fields are tagged with
//! column metadata yields a relational schema, and CRUD calls on instances of
//! that struct translate into parameterized SQL executed against an injected
//! [`Connection`](crate::prelude::Connection).
//!
//! The mapping is declared at compile time with `#[derive(Entity)]`:
//!
//! ```rust,ignore
//! use minorm::prelude::*;
//!
//! #[derive(Debug, Default, Clone, PartialEq, Entity)]
//! #[entity(table = "users")]
//! struct User {
//!     #[column(primary_key, nullable = false)]
//!     id: i32,
//!     #[column(nullable = false, unique)]
//!     username: String,
//!     #[column(nullable = false)]
//!     email: String,
//! }
//!
//! let schema = SchemaGenerator::new(&conn);
//! schema.ensure::<User>()?;
//!
//! let users: Repository<User, _> = Repository::new(&conn);
//! users.insert(&User { id: 1, username: "alice".into(), email: "a@x.com".into() })?;
//! let alice = users.find_by_id(1)?;
//! ```
//!
//! One table per mapped type, flat scalar columns only. No relationship
//! graphs, lazy loading, transactions, migrations or caching.

#![doc(html_playground_url = "https://play.rust-lang.org")]

// makes the crate accessible as `minorm` in macros
extern crate self as minorm;

pub mod error;
pub mod orm;
pub mod prelude;
#[cfg(test)]
mod tests;
