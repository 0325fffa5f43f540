//! Display block wrapper for rendered mrkdwn.

use serde::{Deserialize, Serialize};

/// Result of a conversion: the mrkdwn text and a section block embedding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Single-element block list wrapping `mrkdwn_text`
    pub section_block: Vec<DisplayBlock>,

    /// The rendered mrkdwn
    pub mrkdwn_text: String,
}

impl Conversion {
    pub fn new(mrkdwn_text: String) -> Self {
        Self {
            section_block: vec![DisplayBlock::section(&mrkdwn_text)],
            mrkdwn_text,
        }
    }
}

/// A Block Kit layout block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayBlock {
    Section { text: TextObject },
}

impl DisplayBlock {
    /// Section block with mrkdwn text
    pub fn section(mrkdwn: &str) -> Self {
        DisplayBlock::Section {
            text: TextObject::Mrkdwn {
                text: mrkdwn.to_string(),
            },
        }
    }

    pub fn text(&self) -> &TextObject {
        match self {
            DisplayBlock::Section { text } => text,
        }
    }
}

/// A Block Kit text composition object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn as_str(&self) -> &str {
        match self {
            TextObject::Mrkdwn { text } => text,
        }
    }
}
