use crate::{
    convert::state::ConversionState,
    ops::{ParagraphBorder, ParagraphStyle},
};

impl ConversionState<'_> {
    /// An empty paragraph whose bottom border draws the rule.
    pub(in crate::convert) fn horizontal_rule(&mut self) {
        self.text.end_line();
        let start = self.text.cursor();
        self.guard_bleed(start, start + 1);
        self.text.insert_text("\n");

        let rule = &self.profile.rule;
        let style = ParagraphStyle {
            border_bottom: Some(ParagraphBorder::solid(
                rule.color,
                rule.width_pt,
                rule.padding_pt,
            )),
            ..ParagraphStyle::default()
        };
        self.log.paragraph_style(start, start + 1, style);
    }
}
