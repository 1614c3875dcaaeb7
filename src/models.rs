//! Data Models
//!
//! The persisted list entry plus the ephemeral feedback message.

use serde::{Deserialize, Serialize};

/// One list entry. This is the unit that gets serialized to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation and stable for the item's lifetime
    pub id: u64,
    /// Entry text, stored as typed (minimum length is checked on the trimmed form)
    pub text: String,
    /// Embedded image as a `data:` URL, or `None` when the item has no image
    pub img: Option<String>,
}

/// Kind of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FeedbackKind::Success => "success",
            FeedbackKind::Error => "error",
        }
    }
}

/// Transient status message shown in the banner
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: FeedbackKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: FeedbackKind::Error }
    }
}
