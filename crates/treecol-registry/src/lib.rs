//! # treecol-registry
//!
//! The extension-point registry that lets independent plugins add custom
//! columns to a host item-tree view. Provides:
//!
//! - A patch ledger and method slots so the host's three entry points
//!   (column enumeration, cell rendering, field resolution) are wrapped
//!   exactly once per process, no matter how many plugins install hooks
//! - A process-wide column store shared by every registry instance
//! - A one-shot initialization gate that all public operations await
//! - Column lifecycle management (`register`/`unregister`) with per-column
//!   field and render hooks, falling back to original host behavior
//! - A refresh coordinator that drives the host's view rebuild

pub mod bridge;
pub mod descriptor;
pub mod gate;
pub mod hooks;
pub mod intercept;
pub mod manager;
pub mod patch;
pub mod prelude;
pub mod refresh;
pub mod state;

pub use bridge::HostBridge;
pub use descriptor::{ColumnDescriptor, ColumnOptions, SortDirection};
pub use gate::{GateState, InitGate};
pub use hooks::{FieldHook, RenderCellHook};
pub use manager::ColumnManager;
pub use state::ColumnStore;
