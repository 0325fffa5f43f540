//! Rich Text Abstract Syntax Tree
//!
//! This module defines the nodes of a Slack-style rich text document.
//! The tree is read-only input for rendering; every attribute the payload may
//! omit is either optional or defaults to an empty string.

use indexmap::IndexMap;
use serde_json::Value;

/// Block type whose elements are rendered. Every other block is ignored.
pub const ROOT_BLOCK_TYPE: &str = "rich_text";

/// A sequence of top-level blocks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Check if the document has no blocks at all
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the elements of every root block, in document order
    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.blocks.iter().flat_map(|block| match block {
            Block::RichText(elements) => elements.as_slice(),
            Block::Other(_) => &[],
        })
    }
}

/// A top-level block
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Root `rich_text` block with its elements
    RichText(Vec<Node>),

    /// Any other block type, carried by name only
    Other(String),
}

/// Inline style flags of a text node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub strike: bool,
    pub code: bool,
}

/// Marker style of a list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// `1. `, `2. `, ...
    Ordered,
    /// `* `
    #[default]
    Bullet,
}

impl ListStyle {
    /// Parse a payload style name; anything but `"ordered"` is a bullet list.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("ordered") => ListStyle::Ordered,
            _ => ListStyle::Bullet,
        }
    }
}

/// A rich text node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Text run with optional styling
    Text { text: String, style: TextStyle },

    /// Hyperlink with optional display text
    Link { url: String, text: Option<String> },

    /// User mention
    User { user_id: String },

    /// Channel mention with optional channel name
    Channel {
        channel_id: String,
        channel_name: Option<String>,
    },

    /// Emoji by short name
    Emoji { name: String },

    /// `rich_text_section`: children concatenated
    Section(Vec<Node>),

    /// `rich_text_list`: each child is one item
    List { style: ListStyle, items: Vec<Node> },

    /// `rich_text_quote`: children concatenated, then line-prefixed.
    /// Without a child sequence it renders nothing.
    Quote(Option<Vec<Node>>),

    /// `rich_text_preformatted`: raw text of each child, fenced.
    /// Without a child sequence it renders nothing.
    Preformatted(Option<Vec<Node>>),

    /// Unrecognized or absent node. A null node has neither kind nor elements.
    Unknown {
        kind: Option<String>,
        attributes: IndexMap<String, Value>,
        elements: Option<Vec<Node>>,
    },
}

impl Node {
    /// Create an unstyled text node
    pub fn text(content: &str) -> Self {
        Node::Text {
            text: content.to_string(),
            style: TextStyle::default(),
        }
    }

    /// Create a styled text node
    pub fn styled_text(content: &str, style: TextStyle) -> Self {
        Node::Text {
            text: content.to_string(),
            style,
        }
    }

    /// Create a link node
    pub fn link(url: &str, text: Option<&str>) -> Self {
        Node::Link {
            url: url.to_string(),
            text: text.map(str::to_string),
        }
    }

    /// Create a null node
    pub fn null() -> Self {
        Node::Unknown {
            kind: None,
            attributes: IndexMap::new(),
            elements: None,
        }
    }

    /// Raw `text` attribute, as used inside preformatted blocks
    ///
    /// Styling is not applied, and only the node itself is inspected: a
    /// container's nested content is never collected.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Node::Text { text, .. } => Some(text.as_str()),
            Node::Link { text, .. } => text.as_deref(),
            Node::Unknown { attributes, .. } => attributes.get("text").and_then(Value::as_str),
            _ => None,
        }
    }
}
