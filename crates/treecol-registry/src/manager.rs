//! The column lifecycle manager.
//!
//! One `ColumnManager` per plugin. Every public operation awaits the
//! initialization gate, so nothing is observed by the host's interception
//! points before they exist. The first manager in the process installs the
//! interception wrappers; later managers adopt the shared column store and
//! skip wrapping.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use treecol_core::config::columns::ColumnsConfig;
use treecol_core::result::ColumnResult;

use crate::bridge::HostBridge;
use crate::descriptor::{ColumnDescriptor, ColumnOptions};
use crate::gate::{GateState, InitGate};
use crate::hooks::{FieldHook, RenderCellHook};
use crate::intercept::install_interceptors;
use crate::refresh::RefreshCoordinator;
use crate::state::{ColumnStore, RegisterOutcome};

/// Preference key under which the host persists column layout, as a
/// JSON-encoded mapping from column key to layout properties.
const PERSIST_PREF: &str = "pane.persist";

/// Registers and unregisters columns on behalf of one plugin.
pub struct ColumnManager {
    bridge: Arc<HostBridge>,
    config: ColumnsConfig,
    gate: InitGate,
    init: OnceCell<Arc<ColumnStore>>,
    refresh: RefreshCoordinator,
}

impl ColumnManager {
    /// Creates a manager with default configuration.
    pub fn new(bridge: Arc<HostBridge>) -> Self {
        Self::with_config(bridge, ColumnsConfig::default())
    }

    /// Creates a manager with explicit configuration. The manager starts
    /// out awaiting the host's readiness signal.
    pub fn with_config(bridge: Arc<HostBridge>, config: ColumnsConfig) -> Self {
        let refresh = RefreshCoordinator::new(bridge.view().clone());
        let gate = InitGate::new();
        gate.advance(GateState::AwaitingHost);
        Self {
            bridge,
            config,
            gate,
            init: OnceCell::new(),
            refresh,
        }
    }

    /// The current gate state.
    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Registers a new column. Call [`ColumnManager::unregister`] on plugin
    /// exit.
    ///
    /// A duplicate key is logged and skipped, never an error. Defaults are
    /// applied to unset options, the hooks are installed (overwriting with
    /// a warning), the descriptor is appended after the anchor column, and
    /// the host view is refreshed.
    pub async fn register(
        &self,
        key: &str,
        label: &str,
        field_hook: Option<Arc<dyn FieldHook>>,
        mut options: ColumnOptions,
    ) -> ColumnResult<()> {
        let store = self.ensure_initialized().await;

        if store.contains(key) {
            info!(key = %key, "Column is already registered, skipping");
            return Ok(());
        }

        options.flex = Some(options.flex.unwrap_or(self.config.default_flex));
        let icon_label = options
            .icon_path
            .as_deref()
            .map(|path| self.bridge.icons().icon_label(path, label));
        let render_hook = options.render_cell_hook.clone();
        let descriptor = ColumnDescriptor::from_options(key, label, icon_label, &options);

        match store.register_column(descriptor, field_hook, render_hook) {
            RegisterOutcome::Inserted {
                field_replaced,
                render_replaced,
            } => {
                if field_replaced {
                    warn!(key = %key, "Overwrote an existing field hook");
                }
                if render_replaced {
                    warn!(key = %key, "Overwrote an existing render hook");
                }
                info!(key = %key, label = %label, "Column registered");
            }
            RegisterOutcome::Duplicate => {
                info!(key = %key, "Column is already registered, skipping");
                return Ok(());
            }
        }

        self.refresh.refresh().await
    }

    /// Unregisters a column. Call on plugin exit.
    ///
    /// Prunes the column's persisted layout entry from the host preference
    /// store, removes the descriptor and both hooks (no-ops if absent),
    /// and refreshes the host view. Preference-store failures are the only
    /// errors that propagate.
    pub async fn unregister(&self, key: &str) -> ColumnResult<()> {
        let store = self.ensure_initialized().await;

        self.prune_persisted(key).await?;

        if store.unregister_column(key) {
            info!(key = %key, "Column unregistered");
        } else {
            debug!(key = %key, "Column was not registered");
        }

        self.refresh.refresh().await
    }

    /// Installs a field hook for `key`, overwriting (with a warning) any
    /// existing one.
    ///
    /// Field hooks run inside the host's field-resolution pipeline, which
    /// is invoked from many unrelated code paths; do not install one for a
    /// built-in host field unless that is exactly what you intend.
    pub async fn add_field_hook(&self, key: &str, hook: Arc<dyn FieldHook>) {
        let store = self.ensure_initialized().await;
        if store.set_field_hook(key, hook) {
            warn!(key = %key, "add_field_hook overwrites an existing hook");
        }
    }

    /// Removes the field hook for `key`. Returns whether one was present.
    pub async fn remove_field_hook(&self, key: &str) -> bool {
        let store = self.ensure_initialized().await;
        store.remove_field_hook(key)
    }

    /// Installs a render hook for `key`, overwriting (with a warning) any
    /// existing one. Render hooks also apply to built-in columns.
    pub async fn add_render_cell_hook(&self, key: &str, hook: Arc<dyn RenderCellHook>) {
        let store = self.ensure_initialized().await;
        if store.set_render_hook(key, hook) {
            warn!(key = %key, "add_render_cell_hook overwrites an existing hook");
        }
    }

    /// Removes the render hook for `key` and refreshes the host view.
    pub async fn remove_render_cell_hook(&self, key: &str) -> ColumnResult<()> {
        let store = self.ensure_initialized().await;
        store.remove_render_hook(key);
        self.refresh.refresh().await
    }

    /// Resolves the one-shot gate: waits for host readiness, then installs
    /// the interception wrappers if this is the first registry instance in
    /// the process, or adopts the existing store without re-wrapping.
    async fn ensure_initialized(&self) -> Arc<ColumnStore> {
        self.init
            .get_or_init(|| async {
                self.bridge.ready().await;

                let (store, created) = self.bridge.store_or_init();
                if created {
                    install_interceptors(&self.bridge, &store, &self.config);
                    info!(
                        signature = %self.config.patch_signature,
                        "Interception points installed"
                    );
                } else {
                    debug!("Adopted existing column store, wrapping skipped");
                }

                self.gate.advance(GateState::Patched);
                store
            })
            .await
            .clone()
    }

    /// Read-modify-write of the persisted column-layout mapping: drops the
    /// entry for `key` if present.
    async fn prune_persisted(&self, key: &str) -> ColumnResult<()> {
        let Some(raw) = self.bridge.prefs().get(PERSIST_PREF).await? else {
            debug!(key = %key, "No persisted column layout to prune");
            return Ok(());
        };

        let mut persisted: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&raw)?;
        if persisted.remove(key).is_some() {
            let encoded = serde_json::to_string(&persisted)?;
            self.bridge.prefs().set(PERSIST_PREF, &encoded).await?;
            debug!(key = %key, "Pruned persisted column layout");
        }
        Ok(())
    }
}

impl std::fmt::Debug for ColumnManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnManager")
            .field("gate", &self.gate.state())
            .field("initialized", &self.init.initialized())
            .finish_non_exhaustive()
    }
}
