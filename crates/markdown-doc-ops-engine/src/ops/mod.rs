//! # Edit Operations
//!
//! The output vocabulary of the converter. Every operation addresses the
//! target document by integer index into its flattened text stream; nothing
//! refers to structural nodes.
//!
//! ## Modules
//!
//! - **`style`**: text and paragraph attribute sets with their field masks
//! - **`wire`**: serialization into the reference backend's batch-update requests

pub mod style;
pub mod wire;

use serde::Serialize;

pub use style::{
    Dimension, DashStyle, Link, NamedStyleType, OptionalColor, ParagraphBorder, ParagraphStyle,
    TextStyle, WeightedFontFamily,
};
pub use wire::{BatchUpdate, Request};

/// A half-open index range `[start, end)` in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index.
    pub end: usize,
}

impl TextRange {
    /// Builds a range, returning `None` when it would be empty or inverted.
    /// Such ranges are dropped rather than emitted.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Moves both ends towards the document start by `by` units.
    #[must_use]
    pub fn shifted_left(self, by: usize) -> Self {
        Self {
            start: self.start.saturating_sub(by),
            end: self.end.saturating_sub(by),
        }
    }
}

/// Glyph and numbering scheme of a list, named the way the backend names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulletPreset {
    /// Disc, circle, square rotation across nesting levels.
    BulletDiscCircleSquare,
    /// Decimal, alpha, roman rotation across nesting levels.
    NumberedDecimalAlphaRoman,
}

/// Requested display size of an inline image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageSize {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

/// One position-addressed edit against the target document.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    InsertText {
        index: usize,
        text: String,
    },
    ApplyTextStyle {
        range: TextRange,
        style: TextStyle,
    },
    ApplyParagraphStyle {
        range: TextRange,
        style: ParagraphStyle,
    },
    CreateListBullets {
        range: TextRange,
        preset: BulletPreset,
    },
    ClearListBullets {
        range: TextRange,
    },
    /// Allocates an empty `rows x cols` grid at `index`.
    InsertTable {
        index: usize,
        rows: usize,
        cols: usize,
    },
    /// Occupies exactly one index regardless of `size`.
    InsertInlineImage {
        index: usize,
        uri: String,
        size: Option<ImageSize>,
    },
}

impl Operation {
    /// The range a styling or bullet operation covers.
    pub fn range(&self) -> Option<TextRange> {
        match self {
            Operation::ApplyTextStyle { range, .. }
            | Operation::ApplyParagraphStyle { range, .. }
            | Operation::CreateListBullets { range, .. }
            | Operation::ClearListBullets { range } => Some(*range),
            _ => None,
        }
    }

    /// The anchor index of an operation that adds content.
    pub fn index(&self) -> Option<usize> {
        match self {
            Operation::InsertText { index, .. }
            | Operation::InsertTable { index, .. }
            | Operation::InsertInlineImage { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Attribute names an update operation touches. Empty for other operations.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Operation::ApplyTextStyle { style, .. } => style.fields(),
            Operation::ApplyParagraphStyle { style, .. } => style.fields(),
            _ => Vec::new(),
        }
    }

    /// Short name of the operation, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::InsertText { .. } => "InsertText",
            Operation::ApplyTextStyle { .. } => "ApplyTextStyle",
            Operation::ApplyParagraphStyle { .. } => "ApplyParagraphStyle",
            Operation::CreateListBullets { .. } => "CreateListBullets",
            Operation::ClearListBullets { .. } => "ClearListBullets",
            Operation::InsertTable { .. } => "InsertTable",
            Operation::InsertInlineImage { .. } => "InsertInlineImage",
        }
    }
}
