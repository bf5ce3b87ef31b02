use pulldown_cmark::HeadingLevel;

use crate::{
    convert::state::ConversionState,
    ops::{NamedStyleType, ParagraphStyle},
};

/// A heading whose text is still being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenHeading {
    pub level: u8,
    pub start: usize,
}

impl ConversionState<'_> {
    pub(in crate::convert) fn open_heading(&mut self, level: HeadingLevel) {
        self.begin_item_content();
        self.heading = Some(OpenHeading {
            level: level as u8,
            start: self.text.cursor(),
        });
    }

    /// The named style is recorded before the trailing newline is written,
    /// so its range covers the heading text only.
    pub(in crate::convert) fn close_heading(&mut self) {
        let Some(OpenHeading { level, start }) = self.heading.take() else {
            log::warn!("heading closed without being opened");
            return;
        };
        let end = self.text.cursor();
        self.guard_bleed(start, end);
        match NamedStyleType::heading(level) {
            Some(named) => self
                .log
                .paragraph_style(start, end, ParagraphStyle::named(named)),
            None => log::warn!("no named style for heading level {level}"),
        }
        self.text.insert_text("\n");
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::convert;
    use crate::ops::{NamedStyleType, Operation, ParagraphStyle, TextRange};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", NamedStyleType::Heading1)]
    #[case("## Title", NamedStyleType::Heading2)]
    #[case("### Title", NamedStyleType::Heading3)]
    #[case("#### Title", NamedStyleType::Heading4)]
    #[case("##### Title", NamedStyleType::Heading5)]
    #[case("###### Title", NamedStyleType::Heading6)]
    #[case("Title\n=====", NamedStyleType::Heading1)]
    #[case("Title\n-----", NamedStyleType::Heading2)]
    fn heading_levels(#[case] markdown: &str, #[case] named: NamedStyleType) {
        let ops = convert(markdown, 1).unwrap();
        assert_eq!(
            ops,
            vec![
                Operation::InsertText {
                    index: 1,
                    text: "Title\n".into()
                },
                Operation::ApplyParagraphStyle {
                    range: TextRange::new(1, 6).unwrap(),
                    style: ParagraphStyle::named(named),
                },
            ]
        );
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        let ops = convert("####### Title", 1).unwrap();
        assert_eq!(
            ops,
            vec![Operation::InsertText {
                index: 1,
                text: "####### Title\n".into()
            }]
        );
    }

    #[test]
    fn heading_in_nested_item_starts_after_its_tab() {
        let ops = convert("- a\n  - # T", 1).unwrap();
        assert_eq!(
            ops[0],
            Operation::InsertText {
                index: 1,
                text: "a\n\tT\n".into()
            }
        );
        assert_eq!(
            ops[1],
            Operation::ApplyParagraphStyle {
                range: TextRange::new(4, 5).unwrap(),
                style: ParagraphStyle::named(NamedStyleType::Heading1),
            }
        );
    }

    #[test]
    fn empty_heading_gets_no_style() {
        let ops = convert("#", 1).unwrap();
        assert_eq!(
            ops,
            vec![Operation::InsertText {
                index: 1,
                text: "\n".into()
            }]
        );
    }
}
