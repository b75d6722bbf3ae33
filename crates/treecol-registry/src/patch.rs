//! Method slots and the patch ledger.
//!
//! The host cannot be modified, so each patchable entry point is modelled
//! as a [`MethodSlot`]: the host always calls through the slot, and
//! wrapping swaps the slot's current function for `factory(original)`.
//! The [`PatchLedger`] records which (target, method) pairs a given
//! signature has already wrapped, making [`ensure_patched`] idempotent —
//! construction of a second registry instance never double-wraps.

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

/// A replaceable host method.
///
/// Holds the currently installed function; `get` returns a clone of the
/// `Arc` so callers never hold the lock across an invocation.
pub struct MethodSlot<F: ?Sized> {
    current: RwLock<Arc<F>>,
}

impl<F: ?Sized> MethodSlot<F> {
    /// Creates a slot holding the host's original method.
    pub fn new(original: Arc<F>) -> Self {
        Self {
            current: RwLock::new(original),
        }
    }

    /// Returns the currently installed function.
    pub fn get(&self) -> Arc<F> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn swap(&self, next: Arc<F>) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = next;
    }
}

impl<F: ?Sized> fmt::Debug for MethodSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSlot").finish_non_exhaustive()
    }
}

/// Records which (target, method) pairs have been wrapped, per signature.
///
/// Shared process-wide through the column store so that every registry
/// instance consults the same ledger.
#[derive(Debug, Default)]
pub struct PatchLedger {
    applied: Mutex<HashSet<(String, String, String)>>,
}

impl PatchLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `signature` has already wrapped (target, method).
    pub fn is_patched(&self, target: &str, method: &str, signature: &str) -> bool {
        self.applied
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(&(target.to_string(), method.to_string(), signature.to_string()))
    }

    fn try_claim(&self, target: &str, method: &str, signature: &str) -> bool {
        self.applied
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert((target.to_string(), method.to_string(), signature.to_string()))
    }
}

/// Idempotently wraps `slot` with `factory(original)`.
///
/// The wrap happens only if no prior call with the same `signature` already
/// wrapped this (target, method) pair; subsequent calls are no-ops and the
/// original method reference is never captured twice. Returns whether the
/// wrap was applied.
pub fn ensure_patched<F: ?Sized>(
    ledger: &PatchLedger,
    target: &str,
    method: &str,
    signature: &str,
    slot: &MethodSlot<F>,
    factory: impl FnOnce(Arc<F>) -> Arc<F>,
) -> bool {
    if !ledger.try_claim(target, method, signature) {
        debug!(
            target = %target,
            method = %method,
            signature = %signature,
            "Entry point already wrapped, skipping"
        );
        return false;
    }

    let original = slot.get();
    slot.swap(factory(original));

    debug!(target = %target, method = %method, signature = %signature, "Entry point wrapped");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    type GreetFn = dyn Fn() -> String + Send + Sync;

    fn wrapping_factory(tag: &'static str) -> impl FnOnce(Arc<GreetFn>) -> Arc<GreetFn> {
        move |original| Arc::new(move || format!("{tag}({})", (*original)()))
    }

    #[test]
    fn test_wraps_once_per_signature() {
        let ledger = PatchLedger::new();
        let slot = MethodSlot::<GreetFn>::new(Arc::new(|| "base".to_string()));

        assert!(ensure_patched(&ledger, "tree", "greet", "sig-a", &slot, wrapping_factory("a")));
        assert!(!ensure_patched(&ledger, "tree", "greet", "sig-a", &slot, wrapping_factory("a")));

        assert_eq!((*slot.get())(), "a(base)");
        assert!(ledger.is_patched("tree", "greet", "sig-a"));
    }

    #[test]
    fn test_distinct_signatures_layer() {
        let ledger = PatchLedger::new();
        let slot = MethodSlot::<GreetFn>::new(Arc::new(|| "base".to_string()));

        ensure_patched(&ledger, "tree", "greet", "sig-a", &slot, wrapping_factory("a"));
        ensure_patched(&ledger, "tree", "greet", "sig-b", &slot, wrapping_factory("b"));

        assert_eq!((*slot.get())(), "b(a(base))");
    }

    #[test]
    fn test_distinct_methods_tracked_separately() {
        let ledger = PatchLedger::new();
        let slot = MethodSlot::<GreetFn>::new(Arc::new(|| "base".to_string()));

        assert!(ensure_patched(&ledger, "tree", "greet", "sig", &slot, wrapping_factory("a")));
        assert!(!ledger.is_patched("tree", "other", "sig"));
    }
}
