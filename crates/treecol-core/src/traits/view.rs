//! Host item-view boundary.

use async_trait::async_trait;

use crate::result::ColumnResult;

/// The host's active row/column view, as seen by the refresh coordinator.
///
/// The host does not detect column-set changes on its own, so after any
/// registry mutation the coordinator invalidates the cached layout, drops
/// the cached style list, rebuilds the internal column-layout object, and
/// refreshes twice. During early startup the view may not exist yet;
/// `is_ready` reports that and a refresh is then skipped, not failed.
#[async_trait]
pub trait ItemsView: Send + Sync {
    /// Whether the view and its column-layout object are constructed.
    fn is_ready(&self) -> bool;

    /// Invalidates the host's cached column-layout identifier.
    fn invalidate_layout(&self);

    /// Discards the host's cached rendering-style list.
    fn drop_style_cache(&self);

    /// Rebuilds the row/column view while preserving the current selection.
    async fn refresh_preserving_selection(&self) -> ColumnResult<()>;

    /// Reconstructs the host's internal column-layout object.
    fn rebuild_columns(&self);
}
