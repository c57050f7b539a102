//! Retained element of the in-memory scene.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::element::{Element, ElementHandle, ElementKind, PropertyTarget, SubTarget};
use crate::error::{Error, Result};
use crate::value::Value;

/// An element that records its properties and children.
#[derive(Debug)]
pub struct SceneElement {
    kind: ElementKind,
    properties: RefCell<BTreeMap<String, Value>>,
    subs: HashMap<SubTarget, ElementHandle>,
    children: RefCell<Vec<ElementHandle>>,
}

impl SceneElement {
    /// Create an element with no properties or sub-targets.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            properties: RefCell::new(BTreeMap::new()),
            subs: HashMap::new(),
            children: RefCell::new(Vec::new()),
        }
    }

    /// Wire a sub-target.
    #[must_use]
    pub fn with_sub(mut self, role: SubTarget, target: &ElementHandle) -> Self {
        self.subs.insert(role, Rc::clone(target));
        self
    }

    /// Set an initial property value.
    #[must_use]
    pub fn with_property(self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.borrow_mut().insert(name.to_string(), value.into());
        self
    }

    /// Names of all assigned properties, sorted.
    #[must_use]
    pub fn property_names(&self) -> Vec<String> {
        self.properties.borrow().keys().cloned().collect()
    }

    /// Wrap into a shared handle.
    #[must_use]
    pub fn into_handle(self) -> ElementHandle {
        Rc::new(self)
    }
}

impl PropertyTarget for SceneElement {
    fn set_property(&self, name: &str, value: Value) -> Result<()> {
        tracing::trace!(kind = %self.kind, property = name, "set");
        self.properties.borrow_mut().insert(name.to_string(), value);
        Ok(())
    }

    fn element_kind(&self) -> Option<ElementKind> {
        Some(self.kind)
    }
}

impl Element for SceneElement {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn sub_target(&self, role: SubTarget) -> Option<ElementHandle> {
        self.subs.get(&role).cloned()
    }

    fn attach(&self, child: &ElementHandle) -> Result<()> {
        if self.kind != ElementKind::Layer || !child.kind().is_graph() {
            return Err(Error::Engine(format!(
                "cannot attach {} to {}",
                child.kind(),
                self.kind
            )));
        }
        self.children.borrow_mut().push(Rc::clone(child));
        Ok(())
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.properties.borrow().get(name).cloned()
    }

    fn children(&self) -> Vec<ElementHandle> {
        self.children.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_are_recorded() {
        let e = SceneElement::new(ElementKind::Title).with_property("text", "a");
        e.set_property("fontScale", Value::Float(1.2)).unwrap();
        assert_eq!(e.property("text"), Some(Value::from("a")));
        assert_eq!(e.property_names(), vec!["fontScale", "text"]);
        assert_eq!(e.element_kind(), Some(ElementKind::Title));
    }

    #[test]
    fn test_only_layers_take_graphs() {
        let layer = SceneElement::new(ElementKind::Layer).into_handle();
        let graph = SceneElement::new(ElementKind::XyGraph).into_handle();
        let title = SceneElement::new(ElementKind::Title).into_handle();

        layer.attach(&graph).unwrap();
        assert!(matches!(layer.attach(&title), Err(Error::Engine(_))));
        assert!(graph.attach(&layer).is_err());
        assert_eq!(layer.children().len(), 1);
        assert!(Rc::ptr_eq(&layer.children()[0], &graph));
    }

    #[test]
    fn test_sub_targets() {
        let legend = SceneElement::new(ElementKind::Legend).into_handle();
        let plot = SceneElement::new(ElementKind::Plot).with_sub(SubTarget::Legend, &legend);
        assert!(plot.sub_target(SubTarget::Legend).is_some());
        assert!(plot.sub_target(SubTarget::TickManager).is_none());
    }
}
