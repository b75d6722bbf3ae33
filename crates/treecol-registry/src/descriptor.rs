//! Column descriptors and registration options.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use treecol_core::types::CellElement;

use crate::hooks::RenderCellHook;

/// Default sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Sort ascending by default.
    Ascending,
    /// Sort descending by default.
    Descending,
}

/// Metadata describing one registered column.
///
/// Insertion order into the store defines display order; new columns are
/// spliced immediately after the anchor column in the host's column list.
#[derive(Debug, Clone)]
pub struct ColumnDescriptor {
    /// Unique column key. Doubles as the field name in field resolution.
    pub data_key: String,
    /// Display label.
    pub label: String,
    /// Optional icon-bearing label element.
    pub icon_label: Option<CellElement>,
    /// View contexts that include this column by default.
    pub default_in: Option<HashSet<String>>,
    /// View contexts in which this column is disabled.
    pub disabled_in: Option<HashSet<String>>,
    /// Default sort direction.
    pub default_sort: Option<SortDirection>,
    /// Flex weight.
    pub flex: f32,
    /// Requested width.
    pub width: Option<String>,
    /// Whether the column has a fixed width.
    pub fixed_width: bool,
    /// Whether the column has a static width.
    pub static_width: bool,
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Layout property names the host persists for this column.
    pub persist: HashSet<String>,
    /// Whether the column is hidden from the column picker.
    pub ignore_in_column_picker: bool,
    /// Whether the column picker shows this column in a submenu.
    pub submenu: bool,
}

impl ColumnDescriptor {
    /// Creates a minimal descriptor with defaults applied.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::from_options(key, label, None, &ColumnOptions::default())
    }

    /// Builds a descriptor from registration options, applying defaults:
    /// flex weight 1 and the standard persisted-property set when
    /// unspecified.
    pub fn from_options(
        key: impl Into<String>,
        label: impl Into<String>,
        icon_label: Option<CellElement>,
        options: &ColumnOptions,
    ) -> Self {
        Self {
            data_key: key.into(),
            label: label.into(),
            icon_label,
            default_in: options.default_in.clone(),
            disabled_in: options.disabled_in.clone(),
            default_sort: options.default_sort,
            flex: options.flex.unwrap_or(1.0),
            width: options.width.clone(),
            fixed_width: options.fixed_width,
            static_width: options.static_width,
            min_width: options.min_width,
            persist: options.persist.clone().unwrap_or_else(default_persist),
            ignore_in_column_picker: options.ignore_in_column_picker,
            submenu: options.submenu,
        }
    }
}

/// Options accepted by `register`. All fields are optional; unset fields
/// fall back to the defaults documented on [`ColumnDescriptor`].
#[derive(Clone, Default)]
pub struct ColumnOptions {
    /// View contexts that include this column by default.
    pub default_in: Option<HashSet<String>>,
    /// View contexts in which this column is disabled.
    pub disabled_in: Option<HashSet<String>>,
    /// Default sort direction.
    pub default_sort: Option<SortDirection>,
    /// Flex weight (defaults to 1).
    pub flex: Option<f32>,
    /// Requested width.
    pub width: Option<String>,
    /// Whether the column has a fixed width.
    pub fixed_width: bool,
    /// Whether the column has a static width.
    pub static_width: bool,
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Icon path; when set, an icon label is built via the host's
    /// icon factory.
    pub icon_path: Option<String>,
    /// Hides the column from the column picker.
    pub ignore_in_column_picker: bool,
    /// Shows the column in a picker submenu.
    pub submenu: bool,
    /// Persisted layout property names (defaults to width, ordinal,
    /// hidden, sortActive, sortDirection).
    pub persist: Option<HashSet<String>>,
    /// Render hook installed alongside the column.
    pub render_cell_hook: Option<Arc<dyn RenderCellHook>>,
}

impl fmt::Debug for ColumnOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnOptions")
            .field("default_in", &self.default_in)
            .field("disabled_in", &self.disabled_in)
            .field("default_sort", &self.default_sort)
            .field("flex", &self.flex)
            .field("width", &self.width)
            .field("fixed_width", &self.fixed_width)
            .field("static_width", &self.static_width)
            .field("min_width", &self.min_width)
            .field("icon_path", &self.icon_path)
            .field("ignore_in_column_picker", &self.ignore_in_column_picker)
            .field("submenu", &self.submenu)
            .field("persist", &self.persist)
            .field(
                "render_cell_hook",
                &self.render_cell_hook.as_ref().map(|_| "<hook>"),
            )
            .finish()
    }
}

fn default_persist() -> HashSet<String> {
    ["width", "ordinal", "hidden", "sortActive", "sortDirection"]
        .into_iter()
        .map(str::to_string)
        .collect()
}
