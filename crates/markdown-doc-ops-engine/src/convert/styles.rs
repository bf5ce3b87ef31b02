//! Deferred inline style ranges.
//!
//! Inline styles open and close around text that has not been inserted yet,
//! so they are tracked as intervals and only turned into operations once the
//! whole document is known. Intervals with identical bounds collapse into one
//! operation carrying the union of their attributes.

use std::collections::BTreeMap;

use crate::ops::{TextRange, TextStyle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Strikethrough,
    Link(String),
}

impl InlineStyle {
    /// Links close whichever link is open, whatever its target.
    fn closes(&self, open: &InlineStyle) -> bool {
        match (self, open) {
            (InlineStyle::Link(_), InlineStyle::Link(_)) => true,
            (a, b) => a == b,
        }
    }

    fn to_text_style(&self) -> TextStyle {
        match self {
            InlineStyle::Bold => TextStyle::bold(),
            InlineStyle::Italic => TextStyle::italic(),
            InlineStyle::Strikethrough => TextStyle::strikethrough(),
            InlineStyle::Link(url) => TextStyle::link(url.as_str()),
        }
    }
}

#[derive(Debug, Default)]
pub struct StyleTracker {
    open: Vec<(usize, InlineStyle)>,
    closed: Vec<(TextRange, InlineStyle)>,
}

impl StyleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, at: usize, style: InlineStyle) {
        self.open.push((at, style));
    }

    /// Closes the innermost open entry matching `style`. An unmatched close is
    /// logged and ignored; a close that covers nothing records nothing.
    pub fn pop(&mut self, at: usize, style: &InlineStyle) {
        let Some(pos) = self.open.iter().rposition(|(_, open)| style.closes(open)) else {
            log::warn!("closing {style:?} at {at} with no matching open style, ignoring");
            return;
        };
        let (start, open) = self.open.remove(pos);
        if let Some(range) = TextRange::new(start, at) {
            self.closed.push((range, open));
        }
    }

    /// Merged ranges ordered by position. Styles still open are dropped.
    pub fn finish(self) -> Vec<(TextRange, TextStyle)> {
        for (start, style) in &self.open {
            log::warn!("{style:?} opened at {start} never closed, dropping");
        }
        let mut merged: BTreeMap<TextRange, TextStyle> = BTreeMap::new();
        for (range, style) in self.closed {
            merged
                .entry(range)
                .or_default()
                .merge(&style.to_text_style());
        }
        merged.into_iter().collect()
    }
}
