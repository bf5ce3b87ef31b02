//! # Markdown conversion
//!
//! Turns a Markdown document into the operations that build it in a
//! position-addressed document, starting at a caller-supplied index.
//!
//! ## Pipeline
//!
//! 1. **Tokenizing**: pulldown-cmark with GitHub tables, strikethrough and
//!    task lists produces the event stream.
//! 2. **Dispatch** (`state`): one [`ConversionState`](state::ConversionState)
//!    per call walks the events. Prose goes to a single growing buffer
//!    (`cursor`), inline styles to a deferred range tracker (`styles`), and
//!    everything else to an operation log (`assemble`).
//! 3. **Block handlers** (`blocks`): headings, lists, quotes, code, tables,
//!    rules and images.
//! 4. **Assembly** (`assemble`): content first, then styles, then bullets
//!    shifted for the TABs bullet creation removes (`bullets`).
//!
//! ## Key Invariants
//!
//! - The cursor only moves forward; every recorded index is in coordinates
//!   after all earlier content operations have been applied.
//! - Document lengths count UTF-16 code units.
//! - No range-bearing operation has an empty range.

pub mod assemble;
pub mod blocks;
pub mod bullets;
pub mod cursor;
pub(crate) mod state;
pub mod styles;

use markdown_doc_ops_config::BackendProfile;
use pulldown_cmark::{Event, Options, Parser};

use crate::{error::ConvertError, ops::Operation};

use state::ConversionState;

/// First writable index of an empty document body.
pub const DEFAULT_START_INDEX: usize = 1;

/// Markdown extensions the converter understands.
pub fn parser_options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
}

/// Result of one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub operations: Vec<Operation>,
    /// Index just past the converted content once every operation is applied
    /// and before bullets remove their TABs.
    pub end_index: usize,
}

/// Converter bound to a backend profile. Holds no per-document state, so one
/// instance can convert any number of documents.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter {
    profile: BackendProfile,
}

impl MarkdownConverter {
    pub fn new(profile: BackendProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &BackendProfile {
        &self.profile
    }

    pub fn convert(
        &self,
        markdown: &str,
        start_index: usize,
    ) -> Result<Vec<Operation>, ConvertError> {
        Ok(self.convert_document(markdown, start_index)?.operations)
    }

    pub fn convert_document(
        &self,
        markdown: &str,
        start_index: usize,
    ) -> Result<Converted, ConvertError> {
        self.convert_events(Parser::new_ext(markdown, parser_options()), start_index)
    }

    /// Converts an already tokenized document.
    pub fn convert_events<'a, I>(
        &self,
        events: I,
        start_index: usize,
    ) -> Result<Converted, ConvertError>
    where
        I: IntoIterator<Item = Event<'a>>,
    {
        let mut state = ConversionState::new(&self.profile, start_index);
        for event in events {
            state.handle(event);
        }
        let converted = state.finish()?;
        log::debug!(
            "converted {} operations ending at {}",
            converted.operations.len(),
            converted.end_index
        );
        Ok(converted)
    }
}

/// Converts with the default profile.
pub fn convert(markdown: &str, start_index: usize) -> Result<Vec<Operation>, ConvertError> {
    MarkdownConverter::default().convert(markdown, start_index)
}
