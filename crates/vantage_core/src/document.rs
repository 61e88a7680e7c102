//! Document model
//!
//! A slotmap-keyed element store standing in for the host document. The host
//! is responsible for layout; elements carry the rects the host measured, in
//! document coordinates. Queries iterate in document order (insertion
//! order), which is also the stable tie-break order for visibility ranking.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use thiserror::Error;

use crate::geometry::Rect;

new_key_type! {
    /// Unique identifier for an element in a [`Document`]
    pub struct NodeId;
}

/// Errors raised while loading a document description
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document spec: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One element of the host document: an id, a class set, an attribute map,
/// text content, and the rect the host measured for it.
#[derive(Clone, Debug, Default)]
pub struct Element {
    id: Option<String>,
    classes: SmallVec<[String; 4]>,
    attributes: FxHashMap<String, String>,
    text: String,
    rect: Rect,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove a class based on `on`.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Integer attribute with a safe default: missing or non-numeric
    /// values read as 0.
    pub fn attr_u64(&self, name: &str) -> u64 {
        self.attr(name)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Float attribute with the same missing/non-numeric → 0 semantics.
    pub fn attr_f32(&self, name: &str) -> f32 {
        self.attr(name)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .unwrap_or(0.0)
    }
}

/// The element store. Insertion order is document order.
#[derive(Default)]
pub struct Document {
    elements: SlotMap<NodeId, Element>,
    order: Vec<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, element: Element) -> NodeId {
        let node = self.elements.insert(element);
        self.order.push(node);
        node
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of a node in document order.
    pub fn position(&self, node: NodeId) -> Option<usize> {
        self.order.iter().position(|n| *n == node)
    }

    /// All nodes in document order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// First element with the given id.
    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.order
            .iter()
            .copied()
            .find(|n| self.elements[*n].id() == Some(id))
    }

    /// All nodes carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<NodeId> {
        self.order
            .iter()
            .copied()
            .filter(|n| self.elements[*n].has_class(class))
            .collect()
    }

    /// All nodes carrying the attribute `name`, in document order.
    pub fn with_attr(&self, name: &str) -> Vec<NodeId> {
        self.order
            .iter()
            .copied()
            .filter(|n| self.elements[*n].has_attr(name))
            .collect()
    }

    /// Build a document from a declarative description.
    pub fn from_spec(spec: DocumentSpec) -> Self {
        let mut doc = Document::new();
        for elem in spec.elements {
            let mut element = Element::new()
                .with_text(elem.text)
                .with_rect(Rect::new(elem.rect[0], elem.rect[1], elem.rect[2], elem.rect[3]));
            if let Some(id) = elem.id {
                element = element.with_id(id);
            }
            for class in elem.classes {
                element = element.with_class(class);
            }
            for (name, value) in elem.attributes {
                element = element.with_attr(name, value);
            }
            doc.insert(element);
        }
        doc
    }

    /// Build a document from a JSON description.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let spec: DocumentSpec = serde_json::from_str(json)?;
        Ok(Self::from_spec(spec))
    }
}

/// Declarative document description, loadable from JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DocumentSpec {
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

/// One element of a [`DocumentSpec`]. `rect` is `[x, y, width, height]`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ElementSpec {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attributes: FxHashMap<String, String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub rect: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup_by_id() {
        let mut doc = Document::new();
        let a = doc.insert(Element::new().with_id("about"));
        doc.insert(Element::new().with_id("skills"));

        assert_eq!(doc.node_by_id("about"), Some(a));
        assert_eq!(doc.node_by_id("missing"), None);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_class_queries_in_document_order() {
        let mut doc = Document::new();
        let a = doc.insert(Element::new().with_class("card"));
        doc.insert(Element::new().with_class("other"));
        let c = doc.insert(Element::new().with_class("card"));

        assert_eq!(doc.with_class("card"), vec![a, c]);
        assert_eq!(doc.position(c), Some(2));
    }

    #[test]
    fn test_class_toggle() {
        let mut element = Element::new();
        element.add_class("is-open");
        element.add_class("is-open");
        assert!(element.has_class("is-open"));

        element.toggle_class("is-open", false);
        assert!(!element.has_class("is-open"));
    }

    #[test]
    fn test_numeric_attrs_default_to_zero() {
        let element = Element::new()
            .with_attr("data-count", "150")
            .with_attr("data-reveal-delay", "not-a-number");

        assert_eq!(element.attr_u64("data-count"), 150);
        assert_eq!(element.attr_f32("data-reveal-delay"), 0.0);
        assert_eq!(element.attr_u64("missing"), 0);
    }

    #[test]
    fn test_attr_queries() {
        let mut doc = Document::new();
        let a = doc.insert(Element::new().with_attr("data-reveal", ""));
        doc.insert(Element::new());

        assert_eq!(doc.with_attr("data-reveal"), vec![a]);
    }

    #[test]
    fn test_from_json() {
        let doc = Document::from_json(
            r#"{
                "elements": [
                    {
                        "id": "hero",
                        "classes": ["section"],
                        "attributes": { "data-reveal": "" },
                        "rect": [0.0, 0.0, 1200.0, 800.0]
                    }
                ]
            }"#,
        )
        .unwrap();

        let hero = doc.node_by_id("hero").unwrap();
        let element = doc.get(hero).unwrap();
        assert!(element.has_class("section"));
        assert!(element.has_attr("data-reveal"));
        assert_eq!(element.rect().height(), 800.0);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Document::from_json("not json").is_err());
    }
}
