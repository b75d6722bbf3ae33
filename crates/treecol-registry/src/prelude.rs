//! Convenience re-exports for column plugin authors.

pub use treecol_core::error::{ColumnError, ErrorKind};
pub use treecol_core::result::ColumnResult;
pub use treecol_core::traits::{IconFactory, ItemsView, PreferenceStore};
pub use treecol_core::types::{CellElement, FieldQuery, ItemRecord};

pub use crate::bridge::HostBridge;
pub use crate::descriptor::{ColumnDescriptor, ColumnOptions, SortDirection};
pub use crate::hooks::{CellRendererFn, FieldHook, FieldResolverFn, RenderCellHook};
pub use crate::manager::ColumnManager;
