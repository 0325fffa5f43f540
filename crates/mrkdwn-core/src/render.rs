//! mrkdwn rendering
//!
//! Converts rich text AST nodes into mrkdwn text. Every node renders to its
//! own string and parents concatenate; lists and quotes re-split the rendered
//! output of their children to prefix each line.

use crate::ast::{Block, Document, ListStyle, Node, TextStyle};
use crate::options::Options;

/// Render every root block of a document to one mrkdwn string
pub fn render(document: &Document, options: &Options) -> String {
    let mut output = String::new();
    if document.is_empty() {
        return output;
    }

    for block in &document.blocks {
        if let Block::RichText(elements) = block {
            for node in elements {
                output.push_str(&render_node(node, options, 0));
            }
        }
    }

    output
}

/// Render a single node at the given list nesting depth
pub fn render_node(node: &Node, options: &Options, depth: usize) -> String {
    match node {
        Node::Text { text, style } => render_text(text, *style, options),

        Node::Link { url, text } => match text.as_deref() {
            Some(label) if !label.is_empty() && label != url.as_str() => format!("<{url}|{label}>"),
            _ => format!("<{url}>"),
        },

        Node::User { user_id } => format!("<@{user_id}>"),

        Node::Channel {
            channel_id,
            channel_name,
        } => match channel_name.as_deref() {
            Some(name) if !name.is_empty() && name != channel_id.as_str() => {
                format!("<#{channel_id}|{name}>")
            }
            _ => format!("<#{channel_id}>"),
        },

        Node::Emoji { name } => format!(":{name}:"),

        Node::Section(children) => render_children(children, options, depth),

        Node::List { style, items } => render_list(*style, items, options, depth),

        Node::Quote(children) => children
            .as_deref()
            .map(|children| render_quote(children, options, depth))
            .unwrap_or_default(),

        Node::Preformatted(children) => children
            .as_deref()
            .map(|children| render_preformatted(children, options))
            .unwrap_or_default(),

        Node::Unknown { elements, .. } => elements
            .as_deref()
            .map(|children| render_children(children, options, depth))
            .unwrap_or_default(),
    }
}

fn render_children(children: &[Node], options: &Options, depth: usize) -> String {
    children
        .iter()
        .map(|child| render_node(child, options, depth))
        .collect()
}

/// Wrap text in style markers: bold innermost, then italic, strike, code.
fn render_text(text: &str, style: TextStyle, options: &Options) -> String {
    let mut output = if options.escape_text {
        escape_mrkdwn(text)
    } else {
        text.to_string()
    };

    let markers = [
        (style.bold, '*'),
        (style.italic, '_'),
        (style.strike, '~'),
        (style.code, '`'),
    ];
    for (enabled, marker) in markers {
        if enabled {
            output = format!("{marker}{output}{marker}");
        }
    }

    output
}

fn render_list(style: ListStyle, items: &[Node], options: &Options, depth: usize) -> String {
    let indent = " ".repeat(depth * options.indent_width);
    let mut out = String::new();

    for (i, item) in items.iter().enumerate() {
        let prefix = match style {
            ListStyle::Ordered => format!("{}. ", i + 1),
            ListStyle::Bullet => options.bullet_prefix(),
        };

        let content = render_node(item, options, depth + 1);
        let mut lines = content.split('\n').filter(|line| !line.is_empty());

        out.push_str(&indent);
        out.push_str(&prefix);

        let Some(first) = lines.next() else {
            out.push('\n');
            continue;
        };
        out.push_str(first);
        out.push('\n');

        // Continuation lines align with the first line's text
        let continuation_indent = " ".repeat(prefix.chars().count());
        for line in lines {
            out.push_str(&indent);
            out.push_str(&continuation_indent);
            out.push_str(line);
            out.push('\n');
        }
    }

    trim_list_end(&mut out, depth);
    out
}

/// Prefix every line, empty ones included, with `> `
fn render_quote(children: &[Node], options: &Options, depth: usize) -> String {
    render_children(children, options, depth)
        .split('\n')
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A list never ends in more than one line break, and a top-level list in none
fn trim_list_end(out: &mut String, depth: usize) {
    let allowed = if depth == 0 { 0 } else { 1 };
    let trailing = out.len() - out.trim_end_matches('\n').len();
    if trailing > allowed {
        out.truncate(out.len() - (trailing - allowed));
    }
}

fn render_preformatted(children: &[Node], options: &Options) -> String {
    let content: String = children
        .iter()
        .map(|child| child.raw_text().unwrap_or(""))
        .collect();
    let content = if options.escape_text {
        escape_mrkdwn(&content)
    } else {
        content
    };

    let mut out = String::with_capacity(content.len() + options.fence.len() * 2 + 2);
    out.push_str(&options.fence);
    out.push('\n');
    out.push_str(&content);
    out.push('\n');
    out.push_str(&options.fence);
    out
}

/// Escape the mrkdwn control characters `&`, `<` and `>`
pub fn escape_mrkdwn(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn default_options() -> Options {
        Options::default()
    }

    fn render_one(node: Node) -> String {
        let document = Document::new(vec![Block::RichText(vec![node])]);
        render(&document, &default_options())
    }

    fn style(bold: bool, italic: bool, strike: bool, code: bool) -> TextStyle {
        TextStyle {
            bold,
            italic,
            strike,
            code,
        }
    }

    fn section(text: &str) -> Node {
        Node::Section(vec![Node::text(text)])
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(render_one(Node::text("Hello World")), "Hello World");
    }

    #[test]
    fn test_bold() {
        let node = Node::styled_text("Hello", style(true, false, false, false));
        assert_eq!(render_one(node), "*Hello*");
    }

    #[test]
    fn test_all_styles_nest_in_fixed_order() {
        let node = Node::styled_text("content", style(true, true, true, true));
        assert_eq!(render_one(node), "`~_*content*_~`");
    }

    #[test]
    fn test_italic_and_code() {
        let node = Node::styled_text("x", style(false, true, false, true));
        assert_eq!(render_one(node), "`_x_`");
    }

    #[test]
    fn test_styled_empty_text() {
        let node = Node::styled_text("", style(true, false, false, false));
        assert_eq!(render_one(node), "**");
    }

    #[test]
    fn test_link() {
        let node = Node::link("https://example.com", Some("Example"));
        assert_eq!(render_one(node), "<https://example.com|Example>");
    }

    #[test]
    fn test_link_text_same_as_url() {
        let node = Node::link("https://example.com", Some("https://example.com"));
        assert_eq!(render_one(node), "<https://example.com>");
    }

    #[test]
    fn test_link_without_text() {
        assert_eq!(render_one(Node::link("https://example.com", None)), "<https://example.com>");
        assert_eq!(render_one(Node::link("https://example.com", Some(""))), "<https://example.com>");
    }

    #[test]
    fn test_user() {
        let node = Node::User {
            user_id: "U123".to_string(),
        };
        assert_eq!(render_one(node), "<@U123>");
    }

    #[test]
    fn test_channel() {
        let bare = Node::Channel {
            channel_id: "C42".to_string(),
            channel_name: None,
        };
        assert_eq!(render_one(bare), "<#C42>");

        let named = Node::Channel {
            channel_id: "C42".to_string(),
            channel_name: Some("general".to_string()),
        };
        assert_eq!(render_one(named), "<#C42|general>");

        let same = Node::Channel {
            channel_id: "C42".to_string(),
            channel_name: Some("C42".to_string()),
        };
        assert_eq!(render_one(same), "<#C42>");
    }

    #[test]
    fn test_emoji() {
        let node = Node::Emoji {
            name: "wave".to_string(),
        };
        assert_eq!(render_one(node), ":wave:");
    }

    #[test]
    fn test_section_concatenates_without_separator() {
        let node = Node::Section(vec![
            Node::text("Hi "),
            Node::User {
                user_id: "U1".to_string(),
            },
            Node::text("!"),
        ]);
        assert_eq!(render_one(node), "Hi <@U1>!");
    }

    #[test]
    fn test_ordered_list() {
        let node = Node::List {
            style: ListStyle::Ordered,
            items: vec![section("one"), section("two"), section("three")],
        };
        assert_eq!(render_one(node), "1. one\n2. two\n3. three");
    }

    #[test]
    fn test_bullet_list() {
        let node = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("One"), section("Two")],
        };
        assert_eq!(render_one(node), "* One\n* Two");
    }

    #[test]
    fn test_custom_bullet_marker() {
        let options = Options {
            bullet_list_marker: '-',
            ..Default::default()
        };
        let node = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("One")],
        };
        assert_eq!(render_node(&node, &options, 0), "- One");
    }

    #[test]
    fn test_empty_list() {
        let node = Node::List {
            style: ListStyle::Ordered,
            items: vec![],
        };
        assert_eq!(render_one(node), "");
    }

    #[test]
    fn test_empty_list_item_keeps_prefix() {
        let node = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("a"), Node::Section(vec![]), section("c")],
        };
        assert_eq!(render_one(node), "* a\n* \n* c");
    }

    #[test]
    fn test_multiline_item_aligns_continuation() {
        let node = Node::List {
            style: ListStyle::Ordered,
            items: vec![section("first\nsecond")],
        };
        assert_eq!(render_one(node), "1. first\n   second");
    }

    #[test]
    fn test_two_digit_prefix_aligns_continuation() {
        let mut items: Vec<Node> = (1..10).map(|i| section(&i.to_string())).collect();
        items.push(section("a\nb"));
        let node = Node::List {
            style: ListStyle::Ordered,
            items,
        };
        let rendered = render_one(node);
        assert!(rendered.starts_with("1. 1\n2. 2\n"));
        assert!(rendered.ends_with("9. 9\n10. a\n    b"));
    }

    #[test]
    fn test_list_item_drops_blank_lines() {
        let node = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("a\n\nb\n")],
        };
        assert_eq!(render_one(node), "* a\n  b");
    }

    #[test]
    fn test_nested_list_indents_by_one_level() {
        let inner = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("a"), section("b\nc")],
        };
        let rendered = render_node(&inner, &default_options(), 1);
        assert_eq!(rendered, "    * a\n    * b\n      c\n");
    }

    #[test]
    fn test_list_inside_list() {
        let inner = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("a"), section("b")],
        };
        let outer = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("Parent"), inner],
        };
        assert_eq!(render_one(outer), "* Parent\n*     * a\n      * b");
    }

    #[test]
    fn test_nested_list_keeps_single_trailing_newline() {
        let node = Node::List {
            style: ListStyle::Ordered,
            items: vec![Node::Section(vec![])],
        };
        assert_eq!(render_node(&node, &default_options(), 2), "        1. \n");
    }

    #[test]
    fn test_quote() {
        let node = Node::Quote(Some(vec![Node::text("line one\n"), Node::text("line two")]));
        assert_eq!(render_one(node), "> line one\n> line two");
    }

    #[test]
    fn test_quote_prefixes_empty_lines() {
        let node = Node::Quote(Some(vec![Node::text("a\n\nb\n")]));
        assert_eq!(render_one(node), "> a\n> \n> b\n> ");
    }

    #[test]
    fn test_empty_quote() {
        assert_eq!(render_one(Node::Quote(Some(vec![]))), "> ");
    }

    #[test]
    fn test_quote_without_children() {
        assert_eq!(render_one(Node::Quote(None)), "");
    }

    #[test]
    fn test_empty_preformatted() {
        assert_eq!(render_one(Node::Preformatted(Some(vec![]))), "```\n\n```");
    }

    #[test]
    fn test_preformatted_without_children() {
        assert_eq!(render_one(Node::Preformatted(None)), "");
    }

    #[test]
    fn test_preformatted_uses_raw_text() {
        let node = Node::Preformatted(Some(vec![
            Node::styled_text("a", style(true, true, false, true)),
            Node::text("b"),
        ]));
        assert_eq!(render_one(node), "```\nab\n```");
    }

    #[test]
    fn test_preformatted_ignores_nested_content() {
        let node = Node::Preformatted(Some(vec![
            Node::text("x = 1"),
            Node::Section(vec![Node::text("ignored")]),
            Node::link("https://example.com", Some("link")),
        ]));
        assert_eq!(render_one(node), "```\nx = 1link\n```");
    }

    #[test]
    fn test_unknown_with_children_is_transparent() {
        let node = Node::Unknown {
            kind: Some("rich_text_future".to_string()),
            attributes: Default::default(),
            elements: Some(vec![Node::text("a"), Node::text("b")]),
        };
        assert_eq!(render_one(node), "ab");
    }

    #[test]
    fn test_unknown_without_children_is_empty() {
        let node = Node::Unknown {
            kind: Some("broadcast".to_string()),
            attributes: Default::default(),
            elements: None,
        };
        assert_eq!(render_one(node), "");
        assert_eq!(render_one(Node::null()), "");
    }

    #[test]
    fn test_unknown_passes_depth_through() {
        let list = Node::List {
            style: ListStyle::Bullet,
            items: vec![section("deep")],
        };
        let wrapper = Node::Unknown {
            kind: None,
            attributes: Default::default(),
            elements: Some(vec![list]),
        };
        assert_eq!(render_node(&wrapper, &default_options(), 1), "    * deep\n");
    }

    #[test]
    fn test_only_root_blocks_render() {
        let document = Document::new(vec![
            Block::Other("header".to_string()),
            Block::RichText(vec![Node::text("a")]),
            Block::RichText(vec![Node::text("b"), Node::text("c")]),
        ]);
        assert_eq!(render(&document, &default_options()), "abc");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(&Document::default(), &default_options()), "");
    }

    #[test]
    fn test_escape_mrkdwn() {
        assert_eq!(escape_mrkdwn("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_mrkdwn("normal"), "normal");
    }

    #[test]
    fn test_escape_text_option() {
        let options = Options {
            escape_text: true,
            ..Default::default()
        };
        let text = Node::styled_text("<b>", style(true, false, false, false));
        assert_eq!(render_node(&text, &options, 0), "*&lt;b&gt;*");

        let pre = Node::Preformatted(Some(vec![Node::text("if a && b")]));
        assert_eq!(render_node(&pre, &options, 0), "```\nif a &amp;&amp; b\n```");
    }

    proptest! {
        #[test]
        fn prop_plain_text_is_identity(s in ".*") {
            prop_assert_eq!(render_one(Node::text(&s)), s);
        }

        #[test]
        fn prop_single_line_items_give_one_line_each(
            items in prop::collection::vec("[a-z ]{1,12}", 1..8)
        ) {
            let node = Node::List {
                style: ListStyle::Ordered,
                items: items.iter().map(|item| section(item)).collect(),
            };
            let rendered = render_one(node);
            prop_assert!(!rendered.ends_with('\n'));
            let lines: Vec<&str> = rendered.split('\n').collect();
            prop_assert_eq!(lines.len(), items.len());
            for (i, line) in lines.iter().enumerate() {
                let expected = format!("{}. {}", i + 1, items[i]);
                prop_assert_eq!(*line, expected.as_str());
            }
        }
    }
}
