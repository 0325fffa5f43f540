//! Convert a rich text JSON payload to the AST
//!
//! This module transforms Slack `rich_text` block JSON into the AST defined in
//! mrkdwn-core. Conversion is total: wrong-typed or missing attributes are
//! treated as absent and never fail.

use indexmap::IndexMap;
use mrkdwn_core::{Block, Document, ListStyle, Node, TextStyle, ROOT_BLOCK_TYPE};
use serde_json::Value;
use tracing::trace;

/// Convert a sequence of top-level blocks to a Document
///
/// Anything other than a JSON array yields an empty document.
pub fn convert(value: &Value) -> Document {
    let Some(blocks) = value.as_array() else {
        return Document::default();
    };

    Document::new(blocks.iter().map(convert_block).collect())
}

/// Convert one top-level block
pub fn convert_block(value: &Value) -> Block {
    match string_attr(value, "type") {
        Some(ROOT_BLOCK_TYPE) => Block::RichText(children(value).unwrap_or_default()),
        kind => Block::Other(kind.unwrap_or_default().to_string()),
    }
}

/// Convert one rich text element
pub fn convert_node(value: &Value) -> Node {
    let kind = string_attr(value, "type");

    match kind {
        Some("text") => Node::Text {
            text: owned_attr(value, "text").unwrap_or_default(),
            style: convert_style(value.get("style")),
        },

        Some("link") => Node::Link {
            url: owned_attr(value, "url").unwrap_or_default(),
            text: owned_attr(value, "text"),
        },

        Some("user") => Node::User {
            user_id: owned_attr(value, "user_id").unwrap_or_default(),
        },

        Some("channel") => Node::Channel {
            channel_id: owned_attr(value, "channel_id").unwrap_or_default(),
            channel_name: owned_attr(value, "channel_name"),
        },

        Some("emoji") => Node::Emoji {
            name: owned_attr(value, "name").unwrap_or_default(),
        },

        Some("rich_text_section") => Node::Section(children(value).unwrap_or_default()),

        Some("rich_text_list") => Node::List {
            style: ListStyle::from_name(string_attr(value, "style")),
            items: children(value).unwrap_or_default(),
        },

        Some("rich_text_quote") => Node::Quote(children(value)),

        Some("rich_text_preformatted") => Node::Preformatted(children(value)),

        _ => {
            if let Some(kind) = kind {
                trace!(kind, "passing through unrecognized rich text element");
            }
            Node::Unknown {
                kind: kind.map(str::to_string),
                attributes: opaque_attributes(value),
                elements: children(value),
            }
        }
    }
}

/// Convert the `elements` array, if the value carries one
fn children(value: &Value) -> Option<Vec<Node>> {
    value
        .get("elements")
        .and_then(Value::as_array)
        .map(|elements| elements.iter().map(convert_node).collect())
}

/// Style flags count only when they are JSON `true`; `1`, `"yes"` and other
/// truthy values are ignored.
fn convert_style(style: Option<&Value>) -> TextStyle {
    let Some(style) = style else {
        return TextStyle::default();
    };

    let flag = |name: &str| style.get(name).and_then(Value::as_bool).unwrap_or(false);

    TextStyle {
        bold: flag("bold"),
        italic: flag("italic"),
        strike: flag("strike"),
        code: flag("code"),
    }
}

/// Every attribute of an unrecognized element except its type and children
fn opaque_attributes(value: &Value) -> IndexMap<String, Value> {
    let Some(object) = value.as_object() else {
        return IndexMap::new();
    };

    object
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "type" | "elements"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn string_attr<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value.get(name).and_then(Value::as_str)
}

fn owned_attr(value: &Value, name: &str) -> Option<String> {
    string_attr(value, name).map(str::to_string)
}
