//! In-memory description of nested containers and text.

use std::fmt;

/// Element kinds the views are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    H1,
    P,
}

impl Tag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::H1 => "h1",
            Self::P => "p",
        }
    }

    #[must_use]
    pub const fn is_heading(self) -> bool {
        matches!(self, Self::H1)
    }

    #[must_use]
    pub const fn is_paragraph(self) -> bool {
        matches!(self, Self::P)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A renderable node. Text and class tokens are compile-time literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Element { tag: Tag, classes: Vec<&'static str>, children: Vec<Self> },
    Text(&'static str),
}

impl Node {
    pub fn element(
        tag: Tag,
        classes: impl IntoIterator<Item = &'static str>,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self::Element {
            tag,
            classes: classes.into_iter().collect(),
            children: children.into_iter().collect(),
        }
    }

    #[must_use]
    pub const fn tag(&self) -> Option<Tag> {
        match self {
            Self::Element { tag, .. } => Some(*tag),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn classes(&self) -> &[&'static str] {
        match self {
            Self::Element { classes, .. } => classes,
            Self::Text(_) => &[],
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Class tokens joined for a `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes().join(" ")
    }

    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.classes().iter().any(|class| *class == token)
    }

    /// Direct children that are elements, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &Self> {
        self.children().iter().filter(|child| child.tag().is_some())
    }

    /// Every literal text in document order.
    #[must_use]
    pub fn texts(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        self.texts().concat()
    }

    /// Elements with the given tag, depth-first in document order.
    #[must_use]
    pub fn elements_with_tag(&self, tag: Tag) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_tagged(tag, &mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<&'static str>) {
        match self {
            Self::Text(text) => out.push(*text),
            Self::Element { children, .. } => {
                for child in children {
                    child.collect_texts(out);
                }
            }
        }
    }

    fn collect_tagged<'a>(&'a self, tag: Tag, out: &mut Vec<&'a Self>) {
        if self.tag() == Some(tag) {
            out.push(self);
        }
        for child in self.children() {
            child.collect_tagged(tag, out);
        }
    }
}
