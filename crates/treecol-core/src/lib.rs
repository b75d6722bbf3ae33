//! # treecol-core
//!
//! Core crate for Treecol, a toolkit that lets independent plugins add
//! custom columns to a host application's item-tree view. Contains the
//! host-collaborator traits, configuration schemas, boundary data types
//! (cell elements, item records, field queries), and the unified error
//! system.
//!
//! This crate has **no** internal dependencies on other Treecol crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::ColumnError;
pub use result::ColumnResult;
