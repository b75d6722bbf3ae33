//! Host-collaborator traits.
//!
//! The host application implements these at the boundary; the registry
//! never reimplements host behavior, it only calls through.

pub mod icon;
pub mod prefs;
pub mod view;

pub use icon::IconFactory;
pub use prefs::PreferenceStore;
pub use view::ItemsView;
