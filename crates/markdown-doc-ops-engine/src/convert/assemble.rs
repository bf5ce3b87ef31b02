//! Output assembly.
//!
//! Handlers record operations into an [`OperationLog`] grouped by what they
//! do; [`assemble`] lays the groups out in the order a backend can apply them:
//!
//! 1. content: the single prose insertion, then every separately inserted
//!    piece of content (code, tables and their cells, images) in ascending
//!    index order, so each lands in front of prose that follows it;
//! 2. merged inline text styles;
//! 3. text styles recorded by block handlers;
//! 4. paragraph styles;
//! 5. bullet creation and clearing, shifted for removed TABs.
//!
//! Styles are applied before bullets because they are computed in coordinates
//! where the nesting TABs are still present.

use crate::{
    error::ConvertError,
    ops::{BulletPreset, ImageSize, Operation, ParagraphStyle, TextRange, TextStyle},
    replay::FlatDocument,
};

use super::bullets::{BulletOp, adjust_bullet_ops};

#[derive(Debug, Default)]
pub struct OperationLog {
    content: Vec<Operation>,
    text_styles: Vec<Operation>,
    paragraph_styles: Vec<Operation>,
    bullets: Vec<BulletOp>,
}

impl OperationLog {
    pub fn insert_text(&mut self, index: usize, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.content.push(Operation::InsertText { index, text });
        }
    }

    pub fn insert_table(&mut self, index: usize, rows: usize, cols: usize) {
        self.content
            .push(Operation::InsertTable { index, rows, cols });
    }

    pub fn insert_image(&mut self, index: usize, uri: String, size: Option<ImageSize>) {
        self.content
            .push(Operation::InsertInlineImage { index, uri, size });
    }

    /// Records a block-level text style. Empty ranges are dropped.
    pub fn text_style(&mut self, start: usize, end: usize, style: TextStyle) {
        if let Some(range) = TextRange::new(start, end) {
            self.text_styles
                .push(Operation::ApplyTextStyle { range, style });
        }
    }

    pub fn paragraph_style(&mut self, start: usize, end: usize, style: ParagraphStyle) {
        if let Some(range) = TextRange::new(start, end) {
            self.paragraph_styles
                .push(Operation::ApplyParagraphStyle { range, style });
        }
    }

    pub fn create_bullets(&mut self, start: usize, end: usize, preset: BulletPreset) {
        if let Some(range) = TextRange::new(start, end) {
            self.bullets.push(BulletOp::Create { range, preset });
        }
    }

    pub fn clear_bullets(&mut self, start: usize, end: usize) {
        if let Some(range) = TextRange::new(start, end) {
            self.bullets.push(BulletOp::Clear { range });
        }
    }
}

/// Orders everything recorded during one conversion into the final list.
///
/// The content phase is replayed against a [`FlatDocument`] to count the TABs
/// each bullet range removes, and the complete list is replayed once more so
/// an operation that does not fit the document fails the whole conversion.
pub fn assemble(
    origin: usize,
    prose: Option<(usize, String)>,
    inline_styles: Vec<(TextRange, TextStyle)>,
    log: OperationLog,
) -> Result<Vec<Operation>, ConvertError> {
    let OperationLog {
        content: discrete,
        text_styles,
        paragraph_styles,
        bullets,
    } = log;

    check_content_order(&discrete)?;

    let mut content = Vec::with_capacity(discrete.len() + 1);
    if let Some((index, text)) = prose {
        content.push(Operation::InsertText { index, text });
    }
    content.extend(discrete);

    let mut doc = FlatDocument::replay(origin, &content)?;
    let bullets = adjust_bullet_ops(bullets, |range| doc.leading_tabs(range));

    let mut formatting = Vec::with_capacity(
        inline_styles.len() + text_styles.len() + paragraph_styles.len() + bullets.len(),
    );
    formatting.extend(
        inline_styles
            .into_iter()
            .map(|(range, style)| Operation::ApplyTextStyle { range, style }),
    );
    formatting.extend(text_styles);
    formatting.extend(paragraph_styles);
    formatting.extend(bullets);

    check_ranges(&formatting)?;
    for op in &formatting {
        doc.apply(op)?;
    }

    content.extend(formatting);
    Ok(content)
}

fn check_content_order(discrete: &[Operation]) -> Result<(), ConvertError> {
    let mut previous = 0;
    for op in discrete {
        let Some(index) = op.index() else {
            continue;
        };
        if index < previous {
            debug_assert!(false, "{} at {index} after {previous}", op.kind());
            return Err(ConvertError::UnorderedContent {
                op: op.kind(),
                index,
                previous,
            });
        }
        previous = index;
    }
    Ok(())
}

fn check_ranges(ops: &[Operation]) -> Result<(), ConvertError> {
    for op in ops {
        if let Some(range) = op.range()
            && range.is_empty()
        {
            debug_assert!(false, "{} with empty range {range:?}", op.kind());
            return Err(ConvertError::InvalidRange {
                op: op.kind(),
                start: range.start,
                end: range.end,
            });
        }
    }
    Ok(())
}
