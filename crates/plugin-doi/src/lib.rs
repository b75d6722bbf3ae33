//! DOI column plugin — registers with the Treecol column registry.
//!
//! Adds a "DOI" column to the host item tree. The field hook derives a DOI
//! from the record's raw `DOI` field when present, otherwise from the host
//! record id; the render hook turns the value into a link element, which
//! the registry normalizes into a proper cell.

use std::sync::Arc;

use tracing::info;

use treecol_registry::prelude::*;

/// Column key for the DOI column.
pub const COLUMN_KEY: &str = "doi";

/// Field hook resolving the DOI display string.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoiFieldHook;

impl FieldHook for DoiFieldHook {
    fn resolve(
        &self,
        _query: &FieldQuery,
        item: &ItemRecord,
        _original: &FieldResolverFn,
    ) -> ColumnResult<String> {
        match item.raw_field("DOI") {
            Some(raw) if !raw.is_empty() => Ok(raw.to_string()),
            _ => Ok(format!("10.1/{}", item.id())),
        }
    }
}

/// Render hook producing a link for the resolved DOI.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoiRenderHook;

impl RenderCellHook for DoiRenderHook {
    fn render(
        &self,
        _index: usize,
        data: &str,
        _column: &ColumnDescriptor,
        _original: &CellRendererFn,
    ) -> CellElement {
        CellElement::new("a")
            .with_attr("href", format!("https://doi.org/{data}"))
            .with_text(data)
    }
}

/// Registers the DOI column. Call once at plugin startup.
pub async fn register(manager: &ColumnManager) -> ColumnResult<()> {
    let options = ColumnOptions {
        width: Some("100".to_string()),
        fixed_width: true,
        render_cell_hook: Some(Arc::new(DoiRenderHook)),
        ..ColumnOptions::default()
    };
    manager
        .register(COLUMN_KEY, "DOI", Some(Arc::new(DoiFieldHook)), options)
        .await?;
    info!("DOI column registered");
    Ok(())
}

/// Unregisters the DOI column. Call at plugin exit.
pub async fn unregister(manager: &ColumnManager) -> ColumnResult<()> {
    manager.unregister(COLUMN_KEY).await?;
    info!("DOI column unregistered");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_resolver() -> Box<FieldResolverFn> {
        Box::new(|_: &FieldQuery, _: &ItemRecord| String::new())
    }

    #[test]
    fn test_field_hook_prefers_raw_doi() {
        let item = ItemRecord::new(42).with_field("DOI", "10.5555/real");
        let value = DoiFieldHook
            .resolve(&FieldQuery::new(COLUMN_KEY), &item, noop_resolver().as_ref())
            .expect("resolve");
        assert_eq!(value, "10.5555/real");
    }

    #[test]
    fn test_field_hook_falls_back_to_record_id() {
        let item = ItemRecord::new(42);
        let value = DoiFieldHook
            .resolve(&FieldQuery::new(COLUMN_KEY), &item, noop_resolver().as_ref())
            .expect("resolve");
        assert_eq!(value, "10.1/42");
    }

    #[test]
    fn test_render_hook_builds_link() {
        let original: Box<CellRendererFn> =
            Box::new(|_, data, _| CellElement::new("span").with_text(data));
        let column = ColumnDescriptor::new(COLUMN_KEY, "DOI");
        let elem = DoiRenderHook.render(0, "10.1/42", &column, original.as_ref());
        assert_eq!(elem.tag(), "a");
        assert_eq!(elem.attr("href"), Some("https://doi.org/10.1/42"));
        assert!(!elem.has_class("cell"));
    }
}
