use markdown_doc_ops_config::BackendProfile;
use pulldown_cmark::{Event, Tag, TagEnd};

use crate::{error::ConvertError, ops::TextStyle};

use super::{
    Converted,
    assemble::{OperationLog, assemble},
    blocks::{BlockquoteContext, ListContext, ListKind, OpenHeading, TableBuffer},
    cursor::{TextAccumulator, text_len},
    styles::{InlineStyle, StyleTracker},
};

/// Everything one conversion mutates. Built fresh for every call and consumed
/// by [`finish`](Self::finish), so nothing carries over between documents.
pub(crate) struct ConversionState<'p> {
    pub(super) profile: &'p BackendProfile,
    pub(super) origin: usize,
    pub(super) text: TextAccumulator,
    pub(super) styles: StyleTracker,
    pub(super) lists: ListContext,
    pub(super) quotes: BlockquoteContext,
    pub(super) heading: Option<OpenHeading>,
    pub(super) paragraph_start: Option<usize>,
    /// Text of the code block being read, if inside one.
    pub(super) code_block: Option<String>,
    /// Cells of the table being read, if inside one.
    pub(super) table: Option<TableBuffer>,
    /// Open image tags; their alt text is not inserted.
    pub(super) image_depth: usize,
    pub(super) log: OperationLog,
}

impl<'p> ConversionState<'p> {
    pub fn new(profile: &'p BackendProfile, origin: usize) -> Self {
        Self {
            profile,
            origin,
            text: TextAccumulator::new(origin),
            styles: StyleTracker::new(),
            lists: ListContext::default(),
            quotes: BlockquoteContext::default(),
            heading: None,
            paragraph_start: None,
            code_block: None,
            table: None,
            image_depth: 0,
            log: OperationLog::default(),
        }
    }

    pub fn handle(&mut self, event: Event<'_>) {
        if self.code_block.is_some() {
            self.code_block_event(event);
            return;
        }
        if self.table.is_some() {
            self.table_event(event);
            return;
        }

        match event {
            Event::Start(tag) => self.open(tag),
            Event::End(tag) => self.close(tag),
            Event::Text(text) => self.prose(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::SoftBreak => self.prose(" "),
            Event::HardBreak => self.prose("\n"),
            Event::Rule => self.horizontal_rule(),
            Event::TaskListMarker(checked) => self.task_marker(checked),
            Event::Html(_) | Event::InlineHtml(_) => log::debug!("dropping raw HTML"),
            other => log::debug!("ignoring {other:?}"),
        }
    }

    fn open(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.open_paragraph(),
            Tag::Heading { level, .. } => self.open_heading(level),
            Tag::BlockQuote(_) => self.quotes.enter(),
            Tag::CodeBlock(_) => self.code_block = Some(String::new()),
            Tag::List(first) => self.open_list(ListKind::from_first_number(first)),
            Tag::Item => self.lists.open_item(),
            Tag::Table(_) => self.open_table(),
            Tag::Emphasis => self.open_style(InlineStyle::Italic),
            Tag::Strong => self.open_style(InlineStyle::Bold),
            Tag::Strikethrough => self.open_style(InlineStyle::Strikethrough),
            Tag::Link { dest_url, .. } => self.open_style(InlineStyle::Link(dest_url.into_string())),
            Tag::Image { dest_url, .. } => self.open_image(&dest_url),
            other => log::debug!("ignoring {other:?}"),
        }
    }

    fn close(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.close_paragraph(),
            TagEnd::Heading(_) => self.close_heading(),
            TagEnd::BlockQuote(_) => self.quotes.leave(),
            TagEnd::List(_) => self.close_list(),
            TagEnd::Item => self.close_item(),
            TagEnd::Emphasis => self.close_style(&InlineStyle::Italic),
            TagEnd::Strong => self.close_style(&InlineStyle::Bold),
            TagEnd::Strikethrough => self.close_style(&InlineStyle::Strikethrough),
            TagEnd::Link => self.close_style(&InlineStyle::Link(String::new())),
            TagEnd::Image => self.image_depth = self.image_depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Prose goes into the single shared insertion, behind the item's nesting
    /// TABs when it is the first content of a list item.
    pub(super) fn prose(&mut self, s: &str) {
        if self.image_depth > 0 {
            return;
        }
        self.begin_item_content();
        self.text.insert_text(s);
    }

    fn open_style(&mut self, style: InlineStyle) {
        if self.image_depth > 0 {
            return;
        }
        self.begin_item_content();
        self.styles.push(self.text.cursor(), style);
    }

    fn close_style(&mut self, style: &InlineStyle) {
        if self.image_depth > 0 {
            return;
        }
        self.styles.pop(self.text.cursor(), style);
    }

    fn inline_code(&mut self, code: &str) {
        if self.image_depth > 0 || code.is_empty() {
            return;
        }
        self.begin_item_content();
        let start = self.text.cursor();
        let len = text_len(code);
        self.log.insert_text(start, code);
        self.log.text_style(
            start,
            start + len,
            TextStyle::monospace(self.profile.code.font_family.as_str()),
        );
        self.text.skip(len, false);
    }

    pub fn finish(self) -> Result<Converted, ConvertError> {
        if self.table.is_some() || self.code_block.is_some() || self.heading.is_some() {
            log::warn!("token stream ended inside an open block, dropping it");
        }
        let end_index = self.text.cursor();
        let prose = self.text.finish();
        let inline_styles = self.styles.finish();
        let operations = assemble(self.origin, prose, inline_styles, self.log)?;
        Ok(Converted {
            operations,
            end_index,
        })
    }
}
