//! Boundary data types shared between the registry and the host.

pub mod element;
pub mod record;

pub use element::CellElement;
pub use record::{FieldQuery, ItemRecord};
