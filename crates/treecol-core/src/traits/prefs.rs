//! Host preference store boundary.

use async_trait::async_trait;

use crate::result::ColumnResult;

/// Key-value preference storage exposed by the host.
///
/// The registry uses it for exactly one purpose: the persisted column-layout
/// mapping (a JSON-encoded object keyed by column key) that `unregister`
/// prunes with a read-modify-write.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads the raw preference value for `key`, or `None` if unset.
    async fn get(&self, key: &str) -> ColumnResult<Option<String>>;

    /// Writes the raw preference value for `key`.
    async fn set(&self, key: &str, value: &str) -> ColumnResult<()>;
}
