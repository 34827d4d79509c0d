//! Content node model for conversation documents.
//!
//! This module provides the tagged tree structure consumed by the renderer
//! and the turn extractor. A page-adaptation layer (browser automation, an
//! HTML parser, a test fixture) classifies live markup into this shape; the
//! rest of the crate only ever reads it.

/// Author role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Element kinds recognized by the converter.
///
/// The vocabulary is closed on purpose: the converter dispatches on it with
/// an explicit passthrough arm, so structural wrappers and any kind added
/// later degrade to rendering their children instead of vanishing.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Paragraph,
    LineBreak,
    Bold,
    Italic,
    Strike,
    InlineCode,
    /// Fenced code container. The language tag comes from the page's
    /// `language-*` class convention, see [`language_from_class`].
    ///
    /// [`language_from_class`]: crate::language_from_class
    CodeBlock { language: Option<String> },
    Heading { level: u8 },
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    Link { href: String },
    Image { alt: String, src: String },
    Rule,
    Table,
    TableHead,
    TableBody,
    TableRow,
    TableCell { header: bool },
    Superscript,
    Subscript,
    /// Transparent wrapper (div/span and friends). Renders children only.
    Container,
    /// Non-content markup: interactive controls, iconography, styling.
    /// Always renders to the empty string.
    Ignored,
    /// One conversation-turn container.
    Turn,
    /// The role-bearing element inside a turn container.
    Message { role: Role },
    /// Plain-text source of a user message.
    UserText,
    /// Rich content container of an assistant message.
    RichContent,
}

impl Tag {
    /// Heading with the level clamped to the Markdown range.
    pub fn heading(level: u8) -> Self {
        Tag::Heading {
            level: level.clamp(1, 6),
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Tag::Link { href: href.into() }
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Tag::Image {
            alt: alt.into(),
            src: src.into(),
        }
    }

    /// Code block with the language extracted from a CSS class list.
    pub fn code_block_from_class(class: &str) -> Self {
        Tag::CodeBlock {
            language: crate::language_from_class(class).map(str::to_string),
        }
    }
}

/// A typed content node: either raw text or a tagged element with ordered
/// children. Child order is the only meaningful order; nothing in this
/// crate reorders or deduplicates.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(String),
    Element { tag: Tag, children: Vec<Node> },
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Create an element node with no children.
    pub fn element(tag: Tag) -> Self {
        Node::Element {
            tag,
            children: Vec::new(),
        }
    }

    /// Create an element node with children.
    pub fn with_children(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element { children, .. } = self {
            children.push(child);
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// The element tag, or `None` for text nodes.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Node::Text(_) => None,
            Node::Element { tag, .. } => Some(tag),
        }
    }

    /// Child nodes in order. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Element { children, .. } => children,
        }
    }

    /// All text content of this node and its descendants, concatenated.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(content) => content.clone(),
            Node::Element { children, .. } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }

    /// Preorder iterator over all descendants (excluding `self`), in
    /// document order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children().iter().rev().collect(),
        }
    }
}

/// Iterator returned by [`Node::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.text_content(), "Hello World");
        assert!(node.tag().is_none());
    }

    #[test]
    fn test_create_element() {
        let node = Node::element(Tag::Paragraph);
        assert!(node.is_element());
        assert_eq!(node.tag(), Some(&Tag::Paragraph));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_add_child() {
        let mut parent = Node::element(Tag::Paragraph);
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element(Tag::LineBreak));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().len(), 3);
    }

    #[test]
    fn test_add_child_to_text_is_noop() {
        let mut node = Node::text("leaf");
        node.add_child(Node::text("dropped"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_text_content_recurses() {
        let node = Node::with_children(
            Tag::Paragraph,
            vec![
                Node::text("Hello "),
                Node::with_children(Tag::Bold, vec![Node::text("World")]),
            ],
        );
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_descendants_document_order() {
        let node = Node::with_children(
            Tag::Container,
            vec![
                Node::with_children(Tag::Paragraph, vec![Node::text("a")]),
                Node::text("b"),
            ],
        );

        let texts: Vec<String> = node
            .descendants()
            .filter(|n| n.is_text())
            .map(|n| n.text_content())
            .collect();
        assert_eq!(texts, vec!["a".to_string(), "b".to_string()]);
        // the paragraph, its text child, and the trailing text node
        assert_eq!(node.descendants().count(), 3);
    }

    #[test]
    fn test_heading_clamps_level() {
        assert_eq!(Tag::heading(0), Tag::Heading { level: 1 });
        assert_eq!(Tag::heading(3), Tag::Heading { level: 3 });
        assert_eq!(Tag::heading(9), Tag::Heading { level: 6 });
    }

    #[test]
    fn test_code_block_from_class() {
        assert_eq!(
            Tag::code_block_from_class("hljs language-python"),
            Tag::CodeBlock {
                language: Some("python".to_string())
            }
        );
        assert_eq!(
            Tag::code_block_from_class("hljs"),
            Tag::CodeBlock { language: None }
        );
    }
}
