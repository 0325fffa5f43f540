//! MrkdwnService - the main entry point for rich text to mrkdwn conversion.

use serde_json::Value;
use tracing::debug;

use crate::blocks::Conversion;
use crate::convert::convert;
use crate::Result;

pub use mrkdwn_core::Options as MrkdwnOptions;
use mrkdwn_core::Document;

/// The main service for converting rich text blocks to mrkdwn
pub struct MrkdwnService {
    options: MrkdwnOptions,
}

impl MrkdwnService {
    /// Create a new MrkdwnService with default options
    pub fn new() -> Self {
        Self {
            options: MrkdwnOptions::default(),
        }
    }

    /// Create a MrkdwnService with custom options
    pub fn with_options(options: MrkdwnOptions) -> Self {
        Self { options }
    }

    /// Convert a JSON sequence of top-level blocks
    ///
    /// Never fails: a value that is not an array, or an empty array, produces
    /// an empty string wrapped in the usual section block.
    pub fn convert(&self, blocks: &Value) -> Conversion {
        let document = convert(blocks);
        self.convert_document(&document)
    }

    /// Parse JSON text and convert it
    pub fn convert_str(&self, json: &str) -> Result<Conversion> {
        let blocks: Value = serde_json::from_str(json)?;
        Ok(self.convert(&blocks))
    }

    /// Convert an already-built Document
    pub fn convert_document(&self, document: &Document) -> Conversion {
        let mrkdwn = mrkdwn_core::render(document, &self.options);
        debug!(
            blocks = document.blocks.len(),
            elements = document.elements().count(),
            output_len = mrkdwn.len(),
            "rendered rich text to mrkdwn"
        );
        Conversion::new(mrkdwn)
    }

    /// Get the current options
    pub fn options(&self) -> &MrkdwnOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut MrkdwnOptions {
        &mut self.options
    }

    /// Escape mrkdwn control characters in a string
    pub fn escape(&self, text: &str) -> String {
        mrkdwn_core::escape_mrkdwn(text)
    }
}

impl Default for MrkdwnService {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert rich text blocks with default options
pub fn rich_text_to_mrkdwn(blocks: &Value) -> Conversion {
    MrkdwnService::new().convert(blocks)
}
