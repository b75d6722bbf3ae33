//! Renderable cell elements.
//!
//! A [`CellElement`] is the toolkit-side model of whatever the host's
//! layout engine renders into a cell: a tag, a list of class tokens, an
//! optional text payload, attributes, and nested children. The `"cell"`
//! class token is the marker the host expects on top-level cell elements;
//! render hooks may return anything and the interception layer normalizes
//! unclassified output into a proper cell container.

use serde::{Deserialize, Serialize};

/// A renderable element produced by render hooks and the icon factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellElement {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<CellElement>,
}

impl CellElement {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Builder-style variant of [`CellElement::add_class`].
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Builder-style variant of [`CellElement::set_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Builder-style variant of [`CellElement::set_attr`].
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Adds a class token. Duplicate tokens are ignored.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Returns whether the element carries the given class token.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Sets the text payload.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Appends a child element.
    pub fn append_child(&mut self, child: CellElement) {
        self.children.push(child);
    }

    /// The element's tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's class tokens, in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// The attribute value for `name`, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The element's text payload, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The element's children.
    pub fn children(&self) -> &[CellElement] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_class_deduplicates() {
        let mut elem = CellElement::new("span");
        elem.add_class("cell");
        elem.add_class("cell");
        assert_eq!(elem.classes(), &["cell".to_string()]);
    }

    #[test]
    fn test_has_class() {
        let elem = CellElement::new("span").with_class("cell").with_class("doi");
        assert!(elem.has_class("cell"));
        assert!(elem.has_class("doi"));
        assert!(!elem.has_class("fixed-width"));
    }

    #[test]
    fn test_append_child_nests() {
        let mut outer = CellElement::new("span");
        outer.append_child(CellElement::new("img").with_attr("src", "icon.png"));
        assert_eq!(outer.children().len(), 1);
        assert_eq!(outer.children()[0].attr("src"), Some("icon.png"));
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = CellElement::new("img");
        elem.set_attr("src", "a.png");
        elem.set_attr("src", "b.png");
        assert_eq!(elem.attr("src"), Some("b.png"));
    }
}
