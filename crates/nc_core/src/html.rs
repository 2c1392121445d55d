//! HTML construction that cannot interpolate unescaped text.
//!
//! [`Markup`] is the only type the rendering layer hands to a view. It can
//! be built from escaped text, from `&'static str` literals written in this
//! workspace, or from an [`Element`] whose tag and attribute names are
//! static and whose values and text children are always escaped.

use std::fmt;

/// Escapes the characters that are significant in HTML text and in quoted
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escaped text.
    pub fn text(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// Trusted literal markup. Only `'static` strings are accepted so runtime
    /// data can never reach this constructor.
    pub fn from_static(markup: &'static str) -> Self {
        Self(markup.to_string())
    }

    pub fn push(&mut self, other: impl Into<Markup>) {
        self.0.push_str(&other.into().0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for markup in iter {
            out.push(markup);
        }
        out
    }
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Markup,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Markup::new(),
        }
    }

    /// Sets an attribute. The value is escaped on render.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn attr_if(self, condition: bool, name: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    pub fn id(self, id: &'static str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Appends an escaped text child.
    pub fn text(mut self, text: impl AsRef<str>) -> Self {
        self.children.push(Markup::text(text.as_ref()));
        self
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I, M>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Markup>,
    {
        for child in children {
            self.children.push(child);
        }
        self
    }

    pub fn render(&self) -> Markup {
        let mut out = String::new();
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if !VOID_TAGS.contains(&self.tag) {
            out.push_str(self.children.as_str());
            out.push_str("</");
            out.push_str(self.tag);
            out.push('>');
        }
        Markup(out)
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        element.render()
    }
}

impl From<&Element> for Markup {
    fn from(element: &Element) -> Self {
        element.render()
    }
}
