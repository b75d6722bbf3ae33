//! The host bridge.
//!
//! One `HostBridge` exists per host process. The host constructs it with
//! its original column-list, cell-render, and field-resolution functions
//! plus its collaborator handles, then calls [`HostBridge::get_columns`],
//! [`HostBridge::render_cell`], and [`HostBridge::get_field`] instead of
//! the originals. Registry instances wrap the slots through the patch
//! ledger, so the host picks up interception without further cooperation.
//!
//! The bridge also owns the well-known slot for the process-wide
//! [`ColumnStore`]: the first registry instance creates it, later ones
//! adopt it.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tokio::sync::watch;

use treecol_core::traits::{IconFactory, ItemsView, PreferenceStore};
use treecol_core::types::{CellElement, FieldQuery, ItemRecord};

use crate::descriptor::ColumnDescriptor;
use crate::hooks::{CellRendererFn, ColumnsFn, FieldResolverFn};
use crate::patch::MethodSlot;
use crate::state::ColumnStore;

/// Boundary object connecting registry instances to one host process.
pub struct HostBridge {
    columns: MethodSlot<ColumnsFn>,
    render_cell: MethodSlot<CellRendererFn>,
    resolve_field: MethodSlot<FieldResolverFn>,
    store: OnceLock<Arc<ColumnStore>>,
    ready: watch::Sender<bool>,
    prefs: Arc<dyn PreferenceStore>,
    view: Arc<dyn ItemsView>,
    icons: Arc<dyn IconFactory>,
}

impl HostBridge {
    /// Creates a bridge around the host's original entry points and
    /// collaborators. The bridge starts not-ready; the host calls
    /// [`HostBridge::signal_ready`] once its UI is constructed.
    pub fn new(
        original_columns: Arc<ColumnsFn>,
        original_render_cell: Arc<CellRendererFn>,
        original_resolve_field: Arc<FieldResolverFn>,
        prefs: Arc<dyn PreferenceStore>,
        view: Arc<dyn ItemsView>,
        icons: Arc<dyn IconFactory>,
    ) -> Arc<Self> {
        let (ready, _) = watch::channel(false);
        Arc::new(Self {
            columns: MethodSlot::new(original_columns),
            render_cell: MethodSlot::new(original_render_cell),
            resolve_field: MethodSlot::new(original_resolve_field),
            store: OnceLock::new(),
            ready,
            prefs,
            view,
            icons,
        })
    }

    /// Marks the host UI as constructed, releasing every gate waiting on
    /// readiness. Idempotent.
    pub fn signal_ready(&self) {
        self.ready.send_replace(true);
    }

    /// Suspends until the host has signalled readiness.
    pub async fn ready(&self) {
        if *self.ready.borrow() {
            return;
        }
        let mut rx = self.ready.subscribe();
        // The sender lives as long as `self`, so wait_for cannot fail here.
        let _ = rx.wait_for(|ready| *ready).await;
    }

    /// The host's column list, as extended by registered columns.
    pub fn get_columns(&self) -> Vec<ColumnDescriptor> {
        (*self.columns.get())()
    }

    /// Renders one cell, dispatching to a render hook when one is
    /// registered for the column.
    pub fn render_cell(&self, index: usize, data: &str, column: &ColumnDescriptor) -> CellElement {
        (*self.render_cell.get())(index, data, column)
    }

    /// Resolves one field, dispatching to a field hook when the field is a
    /// registered column key.
    pub fn get_field(&self, query: &FieldQuery, item: &ItemRecord) -> String {
        (*self.resolve_field.get())(query, item)
    }

    /// Returns the process-wide column store, creating it on first call.
    /// The second tuple element reports whether this call created it.
    pub(crate) fn store_or_init(&self) -> (Arc<ColumnStore>, bool) {
        let mut created = false;
        let store = self
            .store
            .get_or_init(|| {
                created = true;
                Arc::new(ColumnStore::new())
            })
            .clone();
        (store, created)
    }

    /// The process-wide column store, if any registry instance has
    /// initialized it yet.
    pub fn store(&self) -> Option<Arc<ColumnStore>> {
        self.store.get().cloned()
    }

    pub(crate) fn columns_slot(&self) -> &MethodSlot<ColumnsFn> {
        &self.columns
    }

    pub(crate) fn render_cell_slot(&self) -> &MethodSlot<CellRendererFn> {
        &self.render_cell
    }

    pub(crate) fn resolve_field_slot(&self) -> &MethodSlot<FieldResolverFn> {
        &self.resolve_field
    }

    /// The host preference store.
    pub fn prefs(&self) -> &Arc<dyn PreferenceStore> {
        &self.prefs
    }

    /// The host's active item view.
    pub fn view(&self) -> &Arc<dyn ItemsView> {
        &self.view
    }

    /// The host's icon factory.
    pub fn icons(&self) -> &Arc<dyn IconFactory> {
        &self.icons
    }
}

impl fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBridge")
            .field("ready", &*self.ready.borrow())
            .field("store_initialized", &self.store.get().is_some())
            .finish_non_exhaustive()
    }
}
