//! The refresh coordinator.
//!
//! The host does not detect column-set changes on its own, so after every
//! registry mutation the coordinator drives a full rebuild: invalidate the
//! cached layout identifier, drop the cached style list, refresh while
//! preserving the selection, reconstruct the internal column-layout
//! object, then refresh once more so the view fully updates.

use std::sync::Arc;

use tracing::info;

use treecol_core::result::ColumnResult;
use treecol_core::traits::ItemsView;

/// Drives the host's view rebuild after registry mutations.
#[derive(Clone)]
pub struct RefreshCoordinator {
    view: Arc<dyn ItemsView>,
}

impl std::fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshCoordinator").finish_non_exhaustive()
    }
}

impl RefreshCoordinator {
    /// Creates a coordinator over the host's active item view.
    pub fn new(view: Arc<dyn ItemsView>) -> Self {
        Self { view }
    }

    /// Rebuilds the host view. During early startup the view may not be
    /// constructed yet; the refresh is then skipped with a log message, a
    /// tolerated no-op rather than an error.
    pub async fn refresh(&self) -> ColumnResult<()> {
        if !self.view.is_ready() {
            info!("Item view is still loading, refresh skipped");
            return Ok(());
        }

        self.view.invalidate_layout();
        self.view.drop_style_cache();
        self.view.refresh_preserving_selection().await?;
        self.view.rebuild_columns();
        self.view.refresh_preserving_selection().await?;
        Ok(())
    }
}
