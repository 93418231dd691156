//! Formatting pipeline for generated articles.
//!
//! Raw model output goes through [`sanitize`], [`classify`] and [`highlight`]
//! once, producing [`DisplayBlock`]s. The [`project`] functions turn those
//! blocks into screen markup, plain text and clipboard HTML.

pub mod classify;
pub mod clipboard;
pub mod highlight;
pub mod project;
pub mod render;
pub mod sanitize;

pub use classify::{classify, ClassifiedLine, HeadingLevel};
pub use clipboard::{copy_payload, ClipboardSink, CopyOutcome, SystemClipboard, COPY_ACK_DURATION};
pub use highlight::{highlight, HighlightSegment, Keyword};
pub use project::{
    format_for_clipboard, screen_stylesheet, to_clipboard_html, to_plain_text, to_screen_html, ClipboardPayload,
};
pub use render::{render, DisplayBlock, HeadingTier};
pub use sanitize::sanitize;

pub mod prelude {
    pub use crate::{format_for_clipboard, render, ClipboardPayload, DisplayBlock, HighlightSegment};
}
