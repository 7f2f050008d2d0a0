#![crate_name = "minorm_macros"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Macros and derive for minorm
//!
//! This crate provides procedural macros to automatically implement traits
//! required by `minorm`.
//!
//! ## Provided Derive Macros
//!
//! - `Entity`: Automatically implements the `Entity` trait for structs.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod entity;
mod utils;

/// Automatically implements the `Entity` trait for a struct.
///
/// The struct-level `#[entity(table = "...")]` attribute declares the target
/// table; each field carrying a `#[column(...)]` attribute becomes a mapped
/// column, in declaration order. Fields without the attribute are ignored.
///
/// Column attributes:
///
/// - `name = "..."` — column name; defaults to the lower-cased field name.
/// - `nullable = <bool>` — whether the column accepts NULL; defaults to `true`.
/// - `unique` — adds a UNIQUE constraint; defaults to off.
/// - `primary_key` — flags the column as the primary key; at most one column
///   per struct may carry it.
///
/// The column's scalar kind is derived from the field's Rust type: `i32`,
/// `i64`, `f32`, `f64`, `bool`, `String`, `chrono::NaiveDate`,
/// `chrono::NaiveDateTime`, or `Option` of one of these. An `Option` field
/// marshals `None` as NULL and accepts NULL on reads.
///
/// # What the macro generates
///
/// Given a struct like:
///
/// ```rust,ignore
/// #[derive(Debug, Default, Clone, PartialEq, Entity)]
/// #[entity(table = "users")]
/// struct User {
///     #[column(nullable = false, primary_key)]
///     id: i32,
///     #[column(nullable = false, unique)]
///     username: String,
/// }
/// ```
///
/// The macro expands into:
///
/// ```rust,ignore
/// impl Entity for User {
///     fn table_name() -> &'static str { "users" }
///
///     fn columns() -> &'static [ColumnDef] {
///         &[/* one ColumnDef per mapped field, in declaration order */]
///     }
///
///     fn to_values(&self) -> Vec<(ColumnDef, Value)> { /* ... */ }
///
///     fn set_column(&mut self, column: &str, value: Value) -> Result<(), QueryError> {
///         /* per-column match with kind checking */
///     }
/// }
/// ```
///
/// # Errors
///
/// The macro will fail to expand if:
///
/// - The `#[entity(table = "...")]` attribute is missing
/// - A `#[column]` field has an unsupported type
/// - More than one column is flagged `primary_key`
/// - The macro is applied to a non-struct item or a tuple struct.
#[proc_macro_derive(Entity, attributes(entity, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    self::entity::entity(input)
}
