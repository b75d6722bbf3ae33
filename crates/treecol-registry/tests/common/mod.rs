//! In-memory host harness shared by the integration tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use treecol_core::result::ColumnResult;
use treecol_core::traits::icon::StockIconFactory;
use treecol_core::traits::{ItemsView, PreferenceStore};
use treecol_core::types::{CellElement, FieldQuery, ItemRecord};
use treecol_registry::descriptor::ColumnDescriptor;
use treecol_registry::HostBridge;

/// Preference store backed by a map.
#[derive(Default)]
pub struct MemoryPrefs {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPrefs {
    pub fn with_value(key: &str, value: &str) -> Arc<Self> {
        let prefs = Self::default();
        prefs
            .values
            .lock()
            .expect("prefs lock")
            .insert(key.to_string(), value.to_string());
        Arc::new(prefs)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().expect("prefs lock").get(key).cloned()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPrefs {
    async fn get(&self, key: &str) -> ColumnResult<Option<String>> {
        Ok(self.values.lock().expect("prefs lock").get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> ColumnResult<()> {
        self.values
            .lock()
            .expect("prefs lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Item view that records refresh activity.
pub struct RecordingView {
    pub ready: AtomicBool,
    pub refreshes: AtomicUsize,
    pub rebuilds: AtomicUsize,
}

impl RecordingView {
    pub fn ready() -> Arc<Self> {
        Arc::new(Self {
            ready: AtomicBool::new(true),
            refreshes: AtomicUsize::new(0),
            rebuilds: AtomicUsize::new(0),
        })
    }

    pub fn not_ready() -> Arc<Self> {
        Arc::new(Self {
            ready: AtomicBool::new(false),
            refreshes: AtomicUsize::new(0),
            rebuilds: AtomicUsize::new(0),
        })
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemsView for RecordingView {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn invalidate_layout(&self) {}

    fn drop_style_cache(&self) {}

    async fn refresh_preserving_selection(&self) -> ColumnResult<()> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn rebuild_columns(&self) {
        self.rebuilds.fetch_add(1, Ordering::SeqCst);
    }
}

/// The built-in column keys the fake host starts with.
pub fn builtin_keys() -> Vec<&'static str> {
    vec!["title", "creator", "date"]
}

/// Builds a bridge around a fake host whose original behavior is:
/// built-in columns from `builtins`, cell rendering into a classed span,
/// and field resolution from the record's raw field map.
pub fn test_bridge(
    builtins: Vec<&'static str>,
    prefs: Arc<MemoryPrefs>,
    view: Arc<RecordingView>,
) -> Arc<HostBridge> {
    let original_columns = Arc::new(move || {
        builtins
            .iter()
            .map(|key| ColumnDescriptor::new(*key, key.to_uppercase()))
            .collect::<Vec<_>>()
    });
    let original_render = Arc::new(|_index: usize, data: &str, column: &ColumnDescriptor| {
        CellElement::new("span")
            .with_class("cell")
            .with_class(column.data_key.clone())
            .with_text(data)
    });
    let original_field = Arc::new(|query: &FieldQuery, item: &ItemRecord| {
        item.raw_field(&query.field).unwrap_or_default().to_string()
    });

    HostBridge::new(
        original_columns,
        original_render,
        original_field,
        prefs,
        view,
        Arc::new(StockIconFactory),
    )
}

/// Bridge over a ready view with empty preferences, host already signalled.
pub fn ready_bridge() -> Arc<HostBridge> {
    let bridge = test_bridge(
        builtin_keys(),
        Arc::new(MemoryPrefs::default()),
        RecordingView::ready(),
    );
    bridge.signal_ready();
    bridge
}
