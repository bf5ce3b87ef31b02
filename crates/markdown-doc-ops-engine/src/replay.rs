//! # Flat-buffer replay
//!
//! A simulated target document that applies [`Operation`]s the way the
//! reference backend does, so operation lists can be checked without a live
//! backend. The converter itself replays its content operations here to learn
//! how many leading TABs each bullet range will remove.
//!
//! ## Model
//!
//! The document is a vector of units, one per UTF-16 code unit of text, one per
//! inline image and one per table structure marker. Index `origin` addresses
//! the first unit. A freshly inserted `R x C` table is laid out as
//!
//! ```text
//! TableStart (RowStart (CellStart CellEnd){C}){R} TableEnd
//! ```
//!
//! which puts the first cell's content three units after the insertion index,
//! each following cell two units later and each row `2C + 1` units apart.
//!
//! Paragraph attributes (bullets) live on the paragraph's terminating newline.

use std::ops::Range;

use crate::{
    error::ReplayError,
    ops::{BulletPreset, Operation, TextRange},
};

const NEWLINE: u16 = b'\n' as u16;
const TAB: u16 = b'\t' as u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMark {
    TableStart,
    RowStart,
    CellStart,
    CellEnd,
    TableEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitKind {
    Text(u16),
    Table(TableMark),
    Image,
}

/// Bullet formatting of one paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBullet {
    pub preset: BulletPreset,
    /// Nesting level, taken from the number of leading TABs removed.
    pub level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletedParagraph {
    /// Paragraph text without its terminating newline.
    pub text: String,
    pub bullet: ListBullet,
}

#[derive(Debug, Clone, Copy)]
struct Unit {
    kind: UnitKind,
    bullet: Option<ListBullet>,
}

impl Unit {
    fn new(kind: UnitKind) -> Self {
        Self { kind, bullet: None }
    }

    fn is(&self, code: u16) -> bool {
        self.kind == UnitKind::Text(code)
    }
}

#[derive(Debug, Clone)]
pub struct FlatDocument {
    origin: usize,
    units: Vec<Unit>,
}

impl FlatDocument {
    /// An empty document whose first insertion point is `origin`.
    pub fn new(origin: usize) -> Self {
        Self {
            origin,
            units: Vec::new(),
        }
    }

    /// Replays `operations` in order against an empty document.
    pub fn replay(origin: usize, operations: &[Operation]) -> Result<Self, ReplayError> {
        let mut doc = Self::new(origin);
        for op in operations {
            doc.apply(op)?;
        }
        Ok(doc)
    }

    pub fn apply(&mut self, op: &Operation) -> Result<(), ReplayError> {
        match op {
            Operation::InsertText { index, text } => {
                let at = self.local_index(op, *index)?;
                let units = text.encode_utf16().map(|c| Unit::new(UnitKind::Text(c)));
                self.units.splice(at..at, units);
            }
            Operation::InsertTable { index, rows, cols } => {
                let at = self.local_index(op, *index)?;
                self.units.splice(at..at, table_units(*rows, *cols));
            }
            Operation::InsertInlineImage { index, .. } => {
                let at = self.local_index(op, *index)?;
                self.units.insert(at, Unit::new(UnitKind::Image));
            }
            Operation::ApplyTextStyle { range, .. } | Operation::ApplyParagraphStyle { range, .. } => {
                self.local_range(op, *range)?;
            }
            Operation::CreateListBullets { range, preset } => {
                let local = self.local_range(op, *range)?;
                self.create_bullets(local, *preset);
            }
            Operation::ClearListBullets { range } => {
                let local = self.local_range(op, *range)?;
                for paragraph in self.overlapping_paragraphs(local) {
                    self.units[paragraph.end - 1].bullet = None;
                }
            }
        }
        Ok(())
    }

    /// Index just past the last unit.
    pub fn end_index(&self) -> usize {
        self.origin + self.units.len()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The document's text with images and table structure left out.
    pub fn plain_text(&self) -> String {
        let code_units: Vec<u16> = self
            .units
            .iter()
            .filter_map(|u| match u.kind {
                UnitKind::Text(c) => Some(c),
                _ => None,
            })
            .collect();
        String::from_utf16_lossy(&code_units)
    }

    /// Total leading TABs of the paragraphs `range` touches. This is the number
    /// of units a bullet operation over `range` removes.
    pub fn leading_tabs(&self, range: TextRange) -> usize {
        let Some(local) = self.clamped_local(range) else {
            return 0;
        };
        self.overlapping_paragraphs(local)
            .into_iter()
            .map(|p| self.count_leading_tabs(p))
            .sum()
    }

    pub fn bulleted_paragraphs(&self) -> Vec<BulletedParagraph> {
        self.paragraphs()
            .into_iter()
            .filter_map(|p| {
                let bullet = self.units[p.end - 1].bullet?;
                let text_end = if self.units[p.end - 1].is(NEWLINE) {
                    p.end - 1
                } else {
                    p.end
                };
                Some(BulletedParagraph {
                    text: self.text_of(p.start..text_end),
                    bullet,
                })
            })
            .collect()
    }

    fn create_bullets(&mut self, local: Range<usize>, preset: BulletPreset) {
        // Back to front so removals don't move paragraphs still to visit.
        for paragraph in self.overlapping_paragraphs(local).into_iter().rev() {
            let tabs = self.count_leading_tabs(paragraph.clone());
            self.units.drain(paragraph.start..paragraph.start + tabs);
            let remaining_end = paragraph.end - tabs;
            if remaining_end > paragraph.start {
                self.units[remaining_end - 1].bullet = Some(ListBullet {
                    preset,
                    level: tabs,
                });
            }
        }
    }

    fn count_leading_tabs(&self, paragraph: Range<usize>) -> usize {
        self.units[paragraph]
            .iter()
            .take_while(|u| u.is(TAB))
            .count()
    }

    fn text_of(&self, range: Range<usize>) -> String {
        let code_units: Vec<u16> = self.units[range]
            .iter()
            .filter_map(|u| match u.kind {
                UnitKind::Text(c) => Some(c),
                _ => None,
            })
            .collect();
        String::from_utf16_lossy(&code_units)
    }

    /// Local ranges of every paragraph, each including its terminating
    /// newline. A trailing fragment without a newline is a paragraph too.
    fn paragraphs(&self) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        let mut start = 0;
        for (i, unit) in self.units.iter().enumerate() {
            if unit.is(NEWLINE) {
                out.push(start..i + 1);
                start = i + 1;
            }
        }
        if start < self.units.len() {
            out.push(start..self.units.len());
        }
        out
    }

    fn overlapping_paragraphs(&self, local: Range<usize>) -> Vec<Range<usize>> {
        self.paragraphs()
            .into_iter()
            .filter(|p| p.start < local.end && local.start < p.end)
            .collect()
    }

    fn local_index(&self, op: &Operation, index: usize) -> Result<usize, ReplayError> {
        if index < self.origin || index > self.end_index() {
            return Err(ReplayError::IndexOutOfBounds {
                op: op.kind(),
                index,
                origin: self.origin,
                end: self.end_index(),
            });
        }
        Ok(index - self.origin)
    }

    fn local_range(&self, op: &Operation, range: TextRange) -> Result<Range<usize>, ReplayError> {
        if range.start < self.origin || range.end > self.end_index() || range.is_empty() {
            return Err(ReplayError::RangeOutOfBounds {
                op: op.kind(),
                start: range.start,
                end: range.end,
                origin: self.origin,
                doc_end: self.end_index(),
            });
        }
        Ok(range.start - self.origin..range.end - self.origin)
    }

    fn clamped_local(&self, range: TextRange) -> Option<Range<usize>> {
        let start = range.start.max(self.origin) - self.origin;
        let end = range.end.min(self.end_index()).saturating_sub(self.origin);
        (start < end).then_some(start..end)
    }
}

fn table_units(rows: usize, cols: usize) -> Vec<Unit> {
    let mut units = vec![Unit::new(UnitKind::Table(TableMark::TableStart))];
    for _ in 0..rows {
        units.push(Unit::new(UnitKind::Table(TableMark::RowStart)));
        for _ in 0..cols {
            units.push(Unit::new(UnitKind::Table(TableMark::CellStart)));
            units.push(Unit::new(UnitKind::Table(TableMark::CellEnd)));
        }
    }
    units.push(Unit::new(UnitKind::Table(TableMark::TableEnd)));
    units
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn insert(index: usize, text: &str) -> Operation {
        Operation::InsertText {
            index,
            text: text.into(),
        }
    }

    fn range(start: usize, end: usize) -> TextRange {
        TextRange::new(start, end).unwrap()
    }

    #[test]
    fn inserts_land_at_their_index() {
        let doc = FlatDocument::replay(1, &[insert(1, "Hello\n"), insert(3, "XY")]).unwrap();
        assert_eq!(doc.plain_text(), "HeXYllo\n");
        assert_eq!(doc.end_index(), 9);
    }

    #[test]
    fn origin_offsets_every_index() {
        let doc = FlatDocument::replay(10, &[insert(10, "ab"), insert(12, "c")]).unwrap();
        assert_eq!(doc.plain_text(), "abc");
        assert_eq!(doc.end_index(), 13);
    }

    #[test]
    fn insert_outside_document_fails() {
        let err = FlatDocument::replay(1, &[insert(1, "ab"), insert(5, "x")]).unwrap_err();
        assert_eq!(
            err,
            ReplayError::IndexOutOfBounds {
                op: "InsertText",
                index: 5,
                origin: 1,
                end: 3,
            }
        );
    }

    #[test]
    fn style_range_past_end_fails() {
        let err = FlatDocument::replay(
            1,
            &[
                insert(1, "ab"),
                Operation::ApplyTextStyle {
                    range: range(1, 4),
                    style: crate::ops::TextStyle::bold(),
                },
            ],
        )
        .unwrap_err();
        assert!(matches!(err, ReplayError::RangeOutOfBounds { end: 4, .. }));
    }

    #[test]
    fn table_cells_fill_reference_layout() {
        let ops = [
            insert(1, "\n"),
            Operation::InsertTable {
                index: 1,
                rows: 2,
                cols: 2,
            },
            insert(4, "A"),
            insert(7, "B"),
            insert(11, "C"),
            insert(14, "D"),
        ];
        let doc = FlatDocument::replay(1, &ops).unwrap();

        assert_eq!(doc.plain_text(), "ABCD\n");
        assert_eq!(doc.end_index(), 18);
        assert_eq!(doc.units[3].kind, UnitKind::Text(b'A' as u16));
        assert_eq!(doc.units[4].kind, UnitKind::Table(TableMark::CellEnd));
        assert_eq!(doc.units[16].kind, UnitKind::Text(NEWLINE));
    }

    #[test]
    fn image_takes_one_unit() {
        let ops = [
            insert(1, "ab\n"),
            Operation::InsertInlineImage {
                index: 2,
                uri: "https://example.com/x.png".into(),
                size: None,
            },
        ];
        let doc = FlatDocument::replay(1, &ops).unwrap();
        assert_eq!(doc.end_index(), 5);
        assert_eq!(doc.plain_text(), "ab\n");
    }

    #[test]
    fn bullets_strip_leading_tabs_and_record_level() {
        let mut doc = FlatDocument::replay(1, &[insert(1, "a\n\tb\n\t\tc\nafter\n")]).unwrap();
        assert_eq!(doc.leading_tabs(range(1, 10)), 3);

        doc.apply(&Operation::CreateListBullets {
            range: range(1, 10),
            preset: BulletPreset::BulletDiscCircleSquare,
        })
        .unwrap();

        assert_eq!(doc.plain_text(), "a\nb\nc\nafter\n");
        let levels: Vec<(String, usize)> = doc
            .bulleted_paragraphs()
            .into_iter()
            .map(|p| (p.text, p.bullet.level))
            .collect();
        assert_eq!(
            levels,
            vec![("a".into(), 0), ("b".into(), 1), ("c".into(), 2)]
        );
    }

    #[test]
    fn range_ending_at_paragraph_start_leaves_it_alone() {
        let mut doc = FlatDocument::replay(1, &[insert(1, "a\nb\n")]).unwrap();
        doc.apply(&Operation::CreateListBullets {
            range: range(1, 3),
            preset: BulletPreset::NumberedDecimalAlphaRoman,
        })
        .unwrap();

        let bulleted = doc.bulleted_paragraphs();
        assert_eq!(bulleted.len(), 1);
        assert_eq!(bulleted[0].text, "a");
    }

    #[test]
    fn clear_removes_bullets() {
        let mut doc = FlatDocument::replay(1, &[insert(1, "a\nb\n")]).unwrap();
        doc.apply(&Operation::CreateListBullets {
            range: range(1, 5),
            preset: BulletPreset::BulletDiscCircleSquare,
        })
        .unwrap();
        doc.apply(&Operation::ClearListBullets { range: range(3, 5) })
            .unwrap();

        let bulleted = doc.bulleted_paragraphs();
        assert_eq!(bulleted.len(), 1);
        assert_eq!(bulleted[0].text, "a");
    }

    #[test]
    fn utf16_length_counts_surrogate_pairs() {
        let doc = FlatDocument::replay(1, &[insert(1, "a😀")]).unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.plain_text(), "a😀");
    }
}
