//! # mrkdwn
//!
//! Convert Slack rich text blocks to mrkdwn.
//!
//! Slack delivers formatted messages as a tree of `rich_text` elements. This
//! library renders that tree as a single mrkdwn string and wraps it in a
//! `section` block ready to be posted back through Block Kit.
//!
//! ## Design
//!
//! Conversion is split in two steps:
//!
//! - **convert**: the JSON payload becomes a typed AST from `mrkdwn-core`.
//!   This step is lenient; missing or malformed attributes are treated as absent.
//! - **render**: the AST becomes mrkdwn text. Rendering is total and pure.
//!
//! ## Example
//!
//! ```rust
//! use mrkdwn::MrkdwnService;
//! use serde_json::json;
//!
//! let service = MrkdwnService::new();
//! let blocks = json!([{
//!     "type": "rich_text",
//!     "elements": [{
//!         "type": "rich_text_section",
//!         "elements": [{"type": "text", "text": "Hello", "style": {"bold": true}}]
//!     }]
//! }]);
//!
//! let result = service.convert(&blocks);
//! assert_eq!(result.mrkdwn_text, "*Hello*");
//! ```

pub mod blocks;
pub mod convert;
mod service;

pub use blocks::{Conversion, DisplayBlock, TextObject};
pub use convert::{convert, convert_node};
pub use mrkdwn_core::{Block, Document, ListStyle, Node, TextStyle};
pub use service::{rich_text_to_mrkdwn, MrkdwnOptions, MrkdwnService};

/// Error type for mrkdwn operations
#[derive(Debug, thiserror::Error)]
pub enum MrkdwnError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MrkdwnError>;
