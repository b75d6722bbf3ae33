//! Interception-point wrappers.
//!
//! Installs the three wrappers around the host's entry points, each a thin
//! layer that consults the column store and falls back to the original
//! host behavior:
//!
//! - column list: splice registered columns immediately after the anchor
//!   column (at the front if the anchor is missing)
//! - cell render: delegate unless a render hook is registered, and
//!   normalize unclassified hook output into a proper cell container
//! - field resolution: dispatch to the field hook for registered column
//!   keys; a failing hook degrades to a string, it never propagates

use std::sync::Arc;

use tracing::{debug, warn};

use treecol_core::config::columns::ColumnsConfig;
use treecol_core::types::{CellElement, FieldQuery, ItemRecord};

use crate::bridge::HostBridge;
use crate::descriptor::ColumnDescriptor;
use crate::patch::ensure_patched;
use crate::state::ColumnStore;

/// Ledger target name for the host item tree.
const TARGET: &str = "item-tree";

/// Installs the three wrappers through the patch ledger. Safe to call more
/// than once with the same signature; repeat calls are no-ops.
pub fn install_interceptors(bridge: &HostBridge, store: &Arc<ColumnStore>, config: &ColumnsConfig) {
    wrap_columns(bridge, store, config);
    wrap_render_cell(bridge, store, config);
    wrap_resolve_field(bridge, store, config);
}

fn wrap_columns(bridge: &HostBridge, store: &Arc<ColumnStore>, config: &ColumnsConfig) {
    let captured = store.clone();
    let anchor = config.anchor_key.clone();
    ensure_patched(
        store.ledger(),
        TARGET,
        "get_columns",
        &config.patch_signature,
        bridge.columns_slot(),
        move |original| {
            let wrapped: Arc<crate::hooks::ColumnsFn> = Arc::new(move || {
                let mut columns = (*original)();
                let extras = captured.columns_snapshot();
                if extras.is_empty() {
                    return columns;
                }
                let at = match columns.iter().position(|c| c.data_key == anchor) {
                    Some(idx) => idx + 1,
                    None => {
                        debug!(anchor = %anchor, "Anchor column not found, inserting at front");
                        0
                    }
                };
                columns.splice(at..at, extras);
                columns
            });
            wrapped
        },
    );
}

fn wrap_render_cell(bridge: &HostBridge, store: &Arc<ColumnStore>, config: &ColumnsConfig) {
    let captured = store.clone();
    ensure_patched(
        store.ledger(),
        TARGET,
        "render_cell",
        &config.patch_signature,
        bridge.render_cell_slot(),
        move |original| {
            let wrapped: Arc<crate::hooks::CellRendererFn> =
                Arc::new(move |index: usize, data: &str, column: &ColumnDescriptor| {
                    let Some(hook) = captured.render_hook(&column.data_key) else {
                        return (*original)(index, data, column);
                    };
                    let elem = hook.render(index, data, column, original.as_ref());
                    if elem.has_class("cell") {
                        return elem;
                    }
                    // Normalize arbitrary hook output into the shape the
                    // host's layout engine expects.
                    let mut cell = CellElement::new("span");
                    cell.add_class("cell");
                    cell.add_class(&column.data_key);
                    cell.add_class(format!("{}-item-tree-main-default", column.data_key));
                    if column.fixed_width {
                        cell.add_class("fixed-width");
                    }
                    cell.append_child(elem);
                    cell
                });
            wrapped
        },
    );
}

fn wrap_resolve_field(bridge: &HostBridge, store: &Arc<ColumnStore>, config: &ColumnsConfig) {
    let captured = store.clone();
    ensure_patched(
        store.ledger(),
        TARGET,
        "get_field",
        &config.patch_signature,
        bridge.resolve_field_slot(),
        move |original| {
            let wrapped: Arc<crate::hooks::FieldResolverFn> =
                Arc::new(move |query: &FieldQuery, item: &ItemRecord| {
                    if captured.contains(&query.field) {
                        if let Some(hook) = captured.field_hook(&query.field) {
                            return match hook.resolve(query, item, original.as_ref()) {
                                Ok(value) => value,
                                Err(err) => {
                                    warn!(
                                        field = %query.field,
                                        error = %err,
                                        "Field hook failed, returning degraded value"
                                    );
                                    format!("{}{}", query.field, err)
                                }
                            };
                        }
                        // Column registered without a field hook: fall through.
                    }
                    (*original)(query, item)
                });
            wrapped
        },
    );
}
