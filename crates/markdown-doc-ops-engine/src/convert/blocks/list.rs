//! Lists become one bullet operation per top-level list.
//!
//! Every item is written as its own paragraph, prefixed with one TAB per
//! nesting level. Creating bullets over the whole list range lets the backend
//! read the level from the TABs and delete them.

use std::mem;

use crate::{convert::state::ConversionState, ops::BulletPreset};

const UNCHECKED_TASK: &str = "\u{2610} ";
const CHECKED_TASK: &str = "\u{2611} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Ordered,
}

impl ListKind {
    /// Ordered lists report their first number, bulleted lists none.
    pub fn from_first_number(first: Option<u64>) -> Self {
        match first {
            Some(_) => ListKind::Ordered,
            None => ListKind::Bulleted,
        }
    }

    pub fn preset(self) -> BulletPreset {
        match self {
            ListKind::Bulleted => BulletPreset::BulletDiscCircleSquare,
            ListKind::Ordered => BulletPreset::NumberedDecimalAlphaRoman,
        }
    }
}

/// Nesting of the lists and items currently open.
#[derive(Debug, Default)]
pub struct ListContext {
    kinds: Vec<ListKind>,
    /// One flag per open item: has it written any content yet.
    items: Vec<bool>,
    top_start: usize,
    just_exited: bool,
}

impl ListContext {
    pub fn in_list(&self) -> bool {
        !self.kinds.is_empty()
    }

    /// Nesting level of items in the innermost open list, `0` at top level.
    pub fn level(&self) -> usize {
        self.kinds.len().saturating_sub(1)
    }

    /// Opening a nested list counts as content of the enclosing item.
    pub fn open(&mut self, kind: ListKind, at: usize) {
        if self.kinds.is_empty() {
            self.top_start = at;
            self.just_exited = false;
        } else if let Some(started) = self.items.last_mut() {
            *started = true;
        }
        self.kinds.push(kind);
    }

    /// Closes the innermost list. Returns the start and kind of the whole
    /// list once the outermost one closes.
    pub fn close(&mut self) -> Option<(usize, ListKind)> {
        let Some(kind) = self.kinds.pop() else {
            log::warn!("list closed without being opened");
            return None;
        };
        if !self.kinds.is_empty() {
            return None;
        }
        self.just_exited = true;
        Some((self.top_start, kind))
    }

    pub fn open_item(&mut self) {
        self.items.push(false);
    }

    pub fn close_item(&mut self) {
        if self.items.pop().is_none() {
            log::warn!("list item closed without being opened");
        }
    }

    pub fn item_started(&self) -> bool {
        self.items.last().copied().unwrap_or(true)
    }

    /// The nesting TABs, the first time the open item writes content.
    pub fn take_item_prefix(&mut self) -> Option<String> {
        let level = self.level();
        let started = self.items.last_mut()?;
        if *started {
            return None;
        }
        *started = true;
        Some("\t".repeat(level))
    }

    /// Whether a list just ended with nothing written since. Reading clears it.
    pub fn take_just_exited(&mut self) -> bool {
        mem::take(&mut self.just_exited)
    }
}

impl ConversionState<'_> {
    pub(in crate::convert) fn open_list(&mut self, kind: ListKind) {
        if self.lists.in_list() {
            self.text.end_line();
        }
        self.lists.open(kind, self.text.cursor());
    }

    pub(in crate::convert) fn close_list(&mut self) {
        let end = self.text.cursor();
        if let Some((start, kind)) = self.lists.close() {
            self.log.create_bullets(start, end, kind.preset());
        }
    }

    /// An item that wrote nothing still becomes an (empty) bulleted paragraph.
    pub(in crate::convert) fn close_item(&mut self) {
        let empty = !self.lists.item_started();
        self.begin_item_content();
        if empty {
            self.text.insert_text("\n");
        } else {
            self.text.end_line();
        }
        self.lists.close_item();
    }

    pub(in crate::convert) fn begin_item_content(&mut self) {
        if let Some(tabs) = self.lists.take_item_prefix() {
            self.text.insert_text(&tabs);
        }
    }

    pub(in crate::convert) fn task_marker(&mut self, checked: bool) {
        self.prose(if checked { CHECKED_TASK } else { UNCHECKED_TASK });
    }

    /// A paragraph written right after a list inherits the list's bullets in
    /// the backend, so the first block after a list clears them over its own
    /// range. Inside a list this is a no-op.
    pub(in crate::convert) fn guard_bleed(&mut self, start: usize, end: usize) {
        if self.lists.in_list() {
            return;
        }
        if self.lists.take_just_exited() {
            self.log.clear_bullets(start, end);
        }
    }
}
