//! Icon label construction boundary.

use crate::types::CellElement;

/// UI-toolkit collaborator that builds composite icon labels.
///
/// Consumed only when a column is registered with an icon path.
pub trait IconFactory: Send + Sync {
    /// Produces a label element combining the icon at `icon_path` with `name`.
    fn icon_label(&self, icon_path: &str, name: &str) -> CellElement;
}

/// Stock [`IconFactory`] producing a `span` wrapping an `img` and the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockIconFactory;

impl IconFactory for StockIconFactory {
    fn icon_label(&self, icon_path: &str, name: &str) -> CellElement {
        let mut label = CellElement::new("span");
        label.append_child(
            CellElement::new("img")
                .with_attr("src", icon_path)
                .with_attr("height", "10px")
                .with_attr("width", "9px"),
        );
        label.set_text(name);
        label
    }
}
