//! Owned document-tree model for the rendered page.
//!
//! The search module mutates the tree it scans (markers in, markers out), so
//! the page is parsed into this owned representation instead of being walked
//! through `scraper`'s read-only tree. Elements keep their tag name,
//! attributes in document order, and children; text runs are leaves.

use scraper::{ElementRef, Html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attrs.iter_mut().find(|(k, _)| k == name) {
            slot.1 = value.to_string();
        } else {
            self.attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Whitespace-separated membership test against the `class` attribute.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|v| v.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Concatenation of every descendant text run, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Merges adjacent text runs into one and drops empty runs, restoring the
    /// single-run shape that marker removal breaks.
    pub fn normalize_children(&mut self) {
        let drained = std::mem::take(&mut self.children);
        let mut merged: Vec<Node> = Vec::with_capacity(drained.len());
        for child in drained {
            match child {
                Node::Text(text) if text.is_empty() => {}
                Node::Text(text) => {
                    if let Some(Node::Text(prev)) = merged.last_mut() {
                        prev.push_str(&text);
                    } else {
                        merged.push(Node::Text(text));
                    }
                }
                element => merged.push(element),
            }
        }
        self.children = merged;
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for child in &el.children {
        match child {
            Node::Element(inner) => collect_text(inner, out),
            Node::Text(text) => out.push_str(text),
        }
    }
}

/// First descendant element (depth-first, self included) with the given tag.
pub fn find_element<'a>(el: &'a Element, name: &str) -> Option<&'a Element> {
    if el.name == name {
        return Some(el);
    }
    for child in &el.children {
        if let Node::Element(inner) = child {
            if let Some(found) = find_element(inner, name) {
                return Some(found);
            }
        }
    }
    None
}

/// Mutable counterpart of [`find_element`].
pub fn find_element_mut<'a>(el: &'a mut Element, name: &str) -> Option<&'a mut Element> {
    if el.name == name {
        return Some(el);
    }
    for child in el.children.iter_mut() {
        if let Node::Element(inner) = child {
            if let Some(found) = find_element_mut(inner, name) {
                return Some(found);
            }
        }
    }
    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The `html` element.
    pub root: Element,
}

impl Document {
    /// Parses rendered HTML into an owned tree. Comments, doctypes and
    /// processing instructions are dropped; text and element structure is
    /// preserved.
    pub fn parse(html: &str) -> Self {
        let parsed = Html::parse_document(html);
        Self {
            root: convert_element(parsed.root_element()),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(32 * 1024);
        out.push_str("<!DOCTYPE html>\n");
        write_element(&self.root, &mut out);
        out
    }

    pub fn text_content(&self) -> String {
        self.root.text_content()
    }

    pub fn find_element(&self, name: &str) -> Option<&Element> {
        find_element(&self.root, name)
    }

    pub fn find_element_mut(&mut self, name: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, name)
    }
}

fn convert_element(el_ref: ElementRef<'_>) -> Element {
    let mut out = Element::new(el_ref.value().name());
    for (key, value) in el_ref.value().attrs() {
        out.attrs.push((key.to_string(), value.to_string()));
    }
    for child in el_ref.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            out.children.push(Node::Element(convert_element(child_el)));
        } else if let Some(text) = child.value().as_text() {
            out.children.push(Node::Text(text.text.to_string()));
        }
    }
    out
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.name);
    for (key, value) in &el.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&el.name.as_str()) {
        return;
    }
    let raw = RAW_TEXT_ELEMENTS.contains(&el.name.as_str());
    for child in &el.children {
        match child {
            Node::Element(inner) => write_element(inner, out),
            Node::Text(text) if raw => out.push_str(text),
            Node::Text(text) => out.push_str(&escape_text(text)),
        }
    }
    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
