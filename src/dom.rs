//! Browser side: builds element trees into the document and adapts DOM
//! elements and listeners to the drag controller.

use anyhow::Context;
use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};

use crate::{
    drag::{DragTarget, MoveHandler, MoveListenerHost, Position},
    view::{Element, Node},
};

pub fn js_err(err: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{err:?}")
}

pub fn build(document: &web_sys::Document, el: &Element) -> anyhow::Result<web_sys::Element> {
    let node = document
        .create_element(el.tag)
        .map_err(js_err)
        .with_context(|| format!("creating <{}>", el.tag))?;
    if !el.class.is_empty() {
        node.set_class_name(&el.class);
    }
    for (name, value) in &el.attrs {
        node.set_attribute(name, value)
            .map_err(js_err)
            .with_context(|| format!("setting {name} on <{}>", el.tag))?;
    }
    for child in &el.children {
        match child {
            Node::Element(child) => {
                let child = build(document, child)?;
                node.append_child(&child).map_err(js_err)?;
            }
            Node::Text(text) => {
                node.append_child(&document.create_text_node(text))
                    .map_err(js_err)?;
            }
        }
    }
    Ok(node)
}

/// Installs the drag movement listener on the document.
pub struct DocumentMoveListener {
    document: web_sys::Document,
}

impl DocumentMoveListener {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl MoveListenerHost for DocumentMoveListener {
    type Subscription = EventListener;

    fn subscribe(&self, mut handler: MoveHandler) -> anyhow::Result<EventListener> {
        Ok(EventListener::new(
            &self.document,
            "mousemove",
            move |event: &web_sys::Event| {
                let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                handler(event);
            },
        ))
    }
}

/// An element positioned through its inline `top`/`left` style.
pub struct ElementTarget {
    element: web_sys::HtmlElement,
}

impl ElementTarget {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self { element }
    }
}

impl DragTarget for ElementTarget {
    fn width(&self) -> f32 {
        self.element.offset_width() as f32
    }

    fn set_position(&self, position: Position) {
        let style = self.element.style();
        for (property, value) in [("top", position.top), ("left", position.left)] {
            if let Err(err) = style.set_property(property, &format!("{value}px")) {
                log::warn!("failed to set {property}: {err:?}");
            }
        }
    }
}
