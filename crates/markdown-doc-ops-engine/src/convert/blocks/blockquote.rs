use crate::{
    convert::state::ConversionState,
    ops::{Dimension, ParagraphBorder, ParagraphStyle, TextStyle},
};

/// Blockquote nesting depth.
#[derive(Debug, Default)]
pub struct BlockquoteContext {
    depth: usize,
}

impl BlockquoteContext {
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    pub fn leave(&mut self) {
        if self.depth == 0 {
            log::warn!("blockquote closed without being opened");
        }
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl ConversionState<'_> {
    /// Quoted paragraphs are indented by one unit per level, get a left
    /// border and are set in italics.
    pub(in crate::convert) fn style_quote_paragraph(&mut self, start: usize, end: usize) {
        self.guard_bleed(start, end);

        let quote = &self.profile.blockquote;
        let indent = Dimension::pt(self.quotes.depth() as f64 * quote.indent_unit_pt);
        let style = ParagraphStyle {
            indent_start: Some(indent),
            indent_first_line: Some(indent),
            border_left: Some(ParagraphBorder::solid(
                quote.border_color,
                quote.border_width_pt,
                quote.border_padding_pt,
            )),
            ..ParagraphStyle::default()
        };
        self.log.paragraph_style(start, end, style);
        self.log.text_style(start, end, TextStyle::italic());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::convert;
    use crate::ops::{Operation, TextRange};
    use markdown_doc_ops_config::BlockquoteStyle;
    use pretty_assertions::assert_eq;

    fn quote_style(depth: f64) -> ParagraphStyle {
        let defaults = BlockquoteStyle::default();
        let indent = Dimension::pt(depth * defaults.indent_unit_pt);
        ParagraphStyle {
            indent_start: Some(indent),
            indent_first_line: Some(indent),
            border_left: Some(ParagraphBorder::solid(
                defaults.border_color,
                defaults.border_width_pt,
                defaults.border_padding_pt,
            )),
            ..ParagraphStyle::default()
        }
    }

    #[test]
    fn quoted_paragraph() {
        let ops = convert("> Quote", 1).unwrap();
        let range = TextRange::new(1, 6).unwrap();
        assert_eq!(
            ops,
            vec![
                Operation::InsertText {
                    index: 1,
                    text: "Quote\n".into()
                },
                Operation::ApplyTextStyle {
                    range,
                    style: TextStyle::italic(),
                },
                Operation::ApplyParagraphStyle {
                    range,
                    style: quote_style(1.0),
                },
            ]
        );
    }

    #[test]
    fn nested_quote_indents_per_level() {
        let ops = convert("> outer\n>\n> > inner", 1).unwrap();
        let styles: Vec<&ParagraphStyle> = ops
            .iter()
            .filter_map(|op| match op {
                Operation::ApplyParagraphStyle { style, .. } => Some(style),
                _ => None,
            })
            .collect();
        assert_eq!(styles, vec![&quote_style(1.0), &quote_style(2.0)]);
    }

    #[test]
    fn quote_after_list_clears_bullets() {
        let ops = convert("- a\n\n> q", 1).unwrap();
        assert_eq!(
            ops.last(),
            Some(&Operation::ClearListBullets {
                range: TextRange::new(3, 4).unwrap()
            })
        );
    }

    #[test]
    fn depth_never_underflows() {
        let mut quotes = BlockquoteContext::default();
        quotes.leave();
        quotes.enter();
        assert_eq!(quotes.depth(), 1);
    }
}
