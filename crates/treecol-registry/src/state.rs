//! The process-wide column store.
//!
//! One `ColumnStore` exists per host process, held in the host bridge's
//! well-known slot. Every registry instance (one per plugin) adopts the
//! same store, which is what lets independently-loaded plugins share one
//! column list without double-patching. Mutations are synchronous under a
//! single lock, so validate-then-mutate never interleaves with another
//! operation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::descriptor::ColumnDescriptor;
use crate::hooks::{FieldHook, RenderCellHook};
use crate::patch::PatchLedger;

/// Outcome of an atomic column registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The column was appended.
    Inserted {
        /// Whether an existing field hook was overwritten.
        field_replaced: bool,
        /// Whether an existing render hook was overwritten.
        render_replaced: bool,
    },
    /// A column with this key already exists; nothing changed.
    Duplicate,
}

#[derive(Default)]
struct StoreInner {
    columns: Vec<ColumnDescriptor>,
    field_hooks: HashMap<String, Arc<dyn FieldHook>>,
    render_hooks: HashMap<String, Arc<dyn RenderCellHook>>,
}

/// Registered columns plus the two hook tables, keyed by column key.
///
/// Created lazily by the first registry instance in the process and shared
/// by all later instances until process teardown.
pub struct ColumnStore {
    inner: RwLock<StoreInner>,
    ledger: PatchLedger,
}

impl ColumnStore {
    /// Creates an empty store with a fresh patch ledger.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            ledger: PatchLedger::new(),
        }
    }

    /// The patch ledger shared by all registry instances using this store.
    pub fn ledger(&self) -> &PatchLedger {
        &self.ledger
    }

    /// Atomically appends `descriptor` and installs its hooks, unless a
    /// column with the same key already exists.
    pub fn register_column(
        &self,
        descriptor: ColumnDescriptor,
        field_hook: Option<Arc<dyn FieldHook>>,
        render_hook: Option<Arc<dyn RenderCellHook>>,
    ) -> RegisterOutcome {
        let mut inner = self.write();
        if inner.columns.iter().any(|c| c.data_key == descriptor.data_key) {
            return RegisterOutcome::Duplicate;
        }

        let key = descriptor.data_key.clone();
        let field_replaced = match field_hook {
            Some(hook) => inner.field_hooks.insert(key.clone(), hook).is_some(),
            None => false,
        };
        let render_replaced = match render_hook {
            Some(hook) => inner.render_hooks.insert(key, hook).is_some(),
            None => false,
        };
        inner.columns.push(descriptor);

        RegisterOutcome::Inserted {
            field_replaced,
            render_replaced,
        }
    }

    /// Atomically removes the column for `key` and both of its hooks.
    /// Returns whether a descriptor was actually removed.
    pub fn unregister_column(&self, key: &str) -> bool {
        let mut inner = self.write();
        let removed = match inner.columns.iter().position(|c| c.data_key == key) {
            Some(idx) => {
                inner.columns.remove(idx);
                true
            }
            None => false,
        };
        inner.field_hooks.remove(key);
        inner.render_hooks.remove(key);
        removed
    }

    /// Whether a column with `key` is registered.
    pub fn contains(&self, key: &str) -> bool {
        self.read().columns.iter().any(|c| c.data_key == key)
    }

    /// Number of registered columns.
    pub fn len(&self) -> usize {
        self.read().columns.len()
    }

    /// Whether no columns are registered.
    pub fn is_empty(&self) -> bool {
        self.read().columns.is_empty()
    }

    /// Snapshot of the registered columns in display order.
    pub fn columns_snapshot(&self) -> Vec<ColumnDescriptor> {
        self.read().columns.clone()
    }

    /// Installs a field hook, replacing any existing one. Returns whether
    /// a hook was replaced.
    pub fn set_field_hook(&self, key: &str, hook: Arc<dyn FieldHook>) -> bool {
        self.write().field_hooks.insert(key.to_string(), hook).is_some()
    }

    /// Removes the field hook for `key`. Returns whether one was present.
    pub fn remove_field_hook(&self, key: &str) -> bool {
        self.write().field_hooks.remove(key).is_some()
    }

    /// The field hook for `key`, if installed.
    pub fn field_hook(&self, key: &str) -> Option<Arc<dyn FieldHook>> {
        self.read().field_hooks.get(key).cloned()
    }

    /// Installs a render hook, replacing any existing one. Returns whether
    /// a hook was replaced.
    pub fn set_render_hook(&self, key: &str, hook: Arc<dyn RenderCellHook>) -> bool {
        self.write().render_hooks.insert(key.to_string(), hook).is_some()
    }

    /// Removes the render hook for `key`. Returns whether one was present.
    pub fn remove_render_hook(&self, key: &str) -> bool {
        self.write().render_hooks.remove(key).is_some()
    }

    /// The render hook for `key`, if installed.
    pub fn render_hook(&self, key: &str) -> Option<Arc<dyn RenderCellHook>> {
        self.read().render_hooks.get(key).cloned()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ColumnStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ColumnStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.read();
        f.debug_struct("ColumnStore")
            .field("columns", &inner.columns.len())
            .field("field_hooks", &inner.field_hooks.len())
            .field("render_hooks", &inner.render_hooks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treecol_core::result::ColumnResult;
    use treecol_core::types::{FieldQuery, ItemRecord};

    use crate::hooks::FieldResolverFn;

    fn noop_field_hook() -> Arc<dyn FieldHook> {
        Arc::new(
            |_: &FieldQuery, _: &ItemRecord, _: &FieldResolverFn| -> ColumnResult<String> {
                Ok(String::new())
            },
        )
    }

    #[test]
    fn test_register_then_duplicate() {
        let store = ColumnStore::new();
        let outcome = store.register_column(
            ColumnDescriptor::new("doi", "DOI"),
            Some(noop_field_hook()),
            None,
        );
        assert!(matches!(outcome, RegisterOutcome::Inserted { .. }));

        let outcome = store.register_column(ColumnDescriptor::new("doi", "DOI again"), None, None);
        assert_eq!(outcome, RegisterOutcome::Duplicate);
        assert_eq!(store.len(), 1);
        assert!(store.field_hook("doi").is_some());
    }

    #[test]
    fn test_unregister_removes_hooks() {
        let store = ColumnStore::new();
        store.register_column(
            ColumnDescriptor::new("doi", "DOI"),
            Some(noop_field_hook()),
            None,
        );

        assert!(store.unregister_column("doi"));
        assert!(!store.contains("doi"));
        assert!(store.field_hook("doi").is_none());

        // absent key is a no-op
        assert!(!store.unregister_column("doi"));
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let store = ColumnStore::new();
        store.register_column(ColumnDescriptor::new("b", "B"), None, None);
        store.register_column(ColumnDescriptor::new("a", "A"), None, None);
        let keys: Vec<_> = store
            .columns_snapshot()
            .into_iter()
            .map(|c| c.data_key)
            .collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_set_field_hook_reports_replacement() {
        let store = ColumnStore::new();
        assert!(!store.set_field_hook("doi", noop_field_hook()));
        assert!(store.set_field_hook("doi", noop_field_hook()));
    }
}
