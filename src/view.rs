//! A small element tree the page is described in.
//!
//! Trees render to an HTML string for prerendering, and on wasm they are built
//! into real DOM nodes (see `dom`).

use std::fmt::Write;

/// Elements with no closing tag.
const VOID_TAGS: &[&str] = &["br", "input"];

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub class: String,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.class = cn(&[self.class.as_str(), class.as_ref()]);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Depth-first search for the first element with `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(el) => el.find_by_id(id),
            Node::Text(_) => None,
        })
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.class.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class));
        }
        for (name, value) in &self.attrs {
            if value.is_empty() && is_boolean_attr(name) {
                let _ = write!(out, " {name}");
            } else {
                let _ = write!(out, " {name}=\"{}\"", escape(value));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape(text)),
            }
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

fn is_boolean_attr(name: &str) -> bool {
    matches!(name, "required" | "disabled")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Joins class lists in order. A later token replaces an earlier duplicate,
/// and an earlier token of the same conflict group under the same variants
/// (`shadow-md` then `shadow-lg`). Only the groups in `conflict_group` are
/// known; any other pair of utilities is kept side by side.
pub fn cn(classes: &[&str]) -> String {
    let mut tokens: Vec<&str> = Vec::new();
    for token in classes.iter().flat_map(|class| class.split_whitespace()) {
        let group = conflict_group(token);
        tokens.retain(|kept| {
            *kept != token && (group.is_none() || conflict_group(kept) != group)
        });
        tokens.push(token);
    }
    tokens.join(" ")
}

/// Variant prefix plus utility group, e.g. `hover:` + `shadow`.
fn conflict_group(token: &str) -> Option<(&str, &'static str)> {
    let (variants, utility) = match token.rfind(':') {
        Some(idx) => token.split_at(idx + 1),
        None => ("", token),
    };
    let group = match utility {
        "shadow" | "shadow-sm" | "shadow-md" | "shadow-lg" | "shadow-xl" | "shadow-2xl"
        | "shadow-inner" | "shadow-none" => "shadow",
        "rounded" | "rounded-none" | "rounded-sm" | "rounded-md" | "rounded-lg" | "rounded-xl"
        | "rounded-2xl" | "rounded-3xl" | "rounded-full" => "rounded",
        _ if utility.starts_with("p-") => "p",
        _ => return None,
    };
    Some((variants, group))
}
