use crate::convert::state::ConversionState;

/// Paragraphs carry no style of their own. Closing one inside a blockquote
/// styles it as quoted; outside any list it is checked for bullet bleed.
impl ConversionState<'_> {
    pub(in crate::convert) fn open_paragraph(&mut self) {
        self.paragraph_start = Some(self.text.cursor());
    }

    pub(in crate::convert) fn close_paragraph(&mut self) {
        let end = self.text.cursor();
        let start = self.paragraph_start.take().unwrap_or(end);
        if self.quotes.depth() > 0 {
            self.style_quote_paragraph(start, end);
        } else {
            self.guard_bleed(start, end);
        }
        self.text.insert_text("\n");
    }
}
