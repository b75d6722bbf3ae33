//! Per-column hook traits.
//!
//! Hooks are keyed by column key with at most one hook of each kind per
//! column; installing over an existing hook logs a warning and overwrites.
//! Both traits have blanket impls for matching closures, so plugins can
//! register either a type or a plain `Fn`.

use treecol_core::result::ColumnResult;
use treecol_core::types::{CellElement, FieldQuery, ItemRecord};

use crate::descriptor::ColumnDescriptor;

/// The host's original field resolver, as captured at wrap time.
pub type FieldResolverFn = dyn Fn(&FieldQuery, &ItemRecord) -> String + Send + Sync;

/// The host's original cell renderer, as captured at wrap time.
pub type CellRendererFn = dyn Fn(usize, &str, &ColumnDescriptor) -> CellElement + Send + Sync;

/// The host's original column-list function, as captured at wrap time.
pub type ColumnsFn = dyn Fn() -> Vec<ColumnDescriptor> + Send + Sync;

/// Produces the display string for a registered column's field.
///
/// Invoked from the host's field-resolution pipeline, which runs from many
/// unrelated code paths; an `Err` is caught at the interception point and
/// converted to a degraded string, never propagated to the host.
pub trait FieldHook: Send + Sync {
    /// Resolves `query` against `item`. `original` is the unpatched host
    /// resolver, available for fallback.
    fn resolve(
        &self,
        query: &FieldQuery,
        item: &ItemRecord,
        original: &FieldResolverFn,
    ) -> ColumnResult<String>;
}

impl<F> FieldHook for F
where
    F: Fn(&FieldQuery, &ItemRecord, &FieldResolverFn) -> ColumnResult<String> + Send + Sync,
{
    fn resolve(
        &self,
        query: &FieldQuery,
        item: &ItemRecord,
        original: &FieldResolverFn,
    ) -> ColumnResult<String> {
        self(query, item, original)
    }
}

/// Produces the cell element for a registered column.
///
/// The returned element need not carry the `"cell"` class; the interception
/// point normalizes unclassified output into a proper cell container.
pub trait RenderCellHook: Send + Sync {
    /// Renders the cell at `index` for `column`. `data` is the raw cell
    /// value and `original` the unpatched host renderer.
    fn render(
        &self,
        index: usize,
        data: &str,
        column: &ColumnDescriptor,
        original: &CellRendererFn,
    ) -> CellElement;
}

impl<F> RenderCellHook for F
where
    F: Fn(usize, &str, &ColumnDescriptor, &CellRendererFn) -> CellElement + Send + Sync,
{
    fn render(
        &self,
        index: usize,
        data: &str,
        column: &ColumnDescriptor,
        original: &CellRendererFn,
    ) -> CellElement {
        self(index, data, column, original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_field_hook() {
        let hook = |query: &FieldQuery,
                    item: &ItemRecord,
                    _original: &FieldResolverFn|
         -> ColumnResult<String> { Ok(format!("{}:{}", query.field, item.id())) };
        let original: Box<FieldResolverFn> = Box::new(|_, _| String::new());
        let value = FieldHook::resolve(
            &hook,
            &FieldQuery::new("doi"),
            &ItemRecord::new(7),
            original.as_ref(),
        )
        .expect("hook succeeds");
        assert_eq!(value, "doi:7");
    }

    #[test]
    fn test_closure_render_hook_can_delegate() {
        let hook = |index: usize,
                    data: &str,
                    column: &ColumnDescriptor,
                    original: &CellRendererFn| original(index, data, column);
        let original: Box<CellRendererFn> = Box::new(|_, data, _| {
            CellElement::new("span").with_class("cell").with_text(data)
        });
        let column = ColumnDescriptor::new("doi", "DOI");
        let elem = RenderCellHook::render(&hook, 0, "10.1/7", &column, original.as_ref());
        assert_eq!(elem.text(), Some("10.1/7"));
    }
}
