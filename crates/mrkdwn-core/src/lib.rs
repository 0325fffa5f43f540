//! mrkdwn-core - Rich text AST and mrkdwn rendering
//!
//! This crate provides the core data structures for Slack-style rich text
//! documents and their rendering to the `mrkdwn` markup dialect. It is used by
//! `mrkdwn`, which converts JSON payloads into this AST.
//!
//! # Architecture
//!
//! ```text
//! rich_text JSON ──convert──▶ ┌───────────────┐
//!                             │               │
//!                             │ Rich text AST │ ──render──▶ mrkdwn String
//! hand-built nodes ──────────▶│               │
//!                             └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mrkdwn_core::{render, Block, Document, ListStyle, Node, Options, TextStyle};
//!
//! let document = Document::new(vec![Block::RichText(vec![
//!     Node::Section(vec![
//!         Node::text("Hello "),
//!         Node::styled_text("World", TextStyle { bold: true, ..Default::default() }),
//!         Node::text("\n"),
//!     ]),
//!     Node::List {
//!         style: ListStyle::Bullet,
//!         items: vec![Node::text("one"), Node::text("two")],
//!     },
//! ])]);
//!
//! let mrkdwn = render(&document, &Options::default());
//! assert_eq!(mrkdwn, "Hello *World*\n* one\n* two");
//! ```

mod ast;
mod options;
mod render;

pub use ast::{Block, Document, ListStyle, Node, TextStyle, ROOT_BLOCK_TYPE};
pub use options::Options;
pub use render::{escape_mrkdwn, render, render_node};
