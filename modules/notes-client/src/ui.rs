//! Minimal HTML element tree.
//!
//! Text and attribute values are escaped when rendered, so note fields can be
//! placed into the tree as-is. Only [`Node::Raw`] bypasses escaping and it is
//! reserved for static markup owned by this crate (the stylesheet).

use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["input", "meta", "br", "hr", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Elements (depth-first, including `self`) carrying `class`.
    #[cfg(test)]
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    #[cfg(test)]
    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        let has_class = self
            .attrs
            .iter()
            .any(|(name, value)| *name == "class" && value.split_whitespace().any(|c| c == class));
        if has_class {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                el.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated unescaped text of all descendants.
    #[cfg(test)]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(el) => out.push_str(&el.text_content()),
                Node::Text(text) => out.push_str(text),
                Node::Raw(_) => {}
            }
        }
        out
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.render_into(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
                Node::Raw(raw) => out.push_str(raw),
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

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// Render a full document around `body`.
pub fn document(title: &str, style: &'static str, body: Element) -> String {
    let html = Element::new("html")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").text(title))
                .child(Element::new("style").child(Node::Raw(style))),
        )
        .child(body);
    format!("<!DOCTYPE html>{}", html.render())
}
