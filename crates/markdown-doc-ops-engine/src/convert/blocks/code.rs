use pulldown_cmark::{Event, TagEnd};

use crate::{
    convert::{cursor::text_len, state::ConversionState},
    ops::TextStyle,
};

/// Code blocks are raw zones: their text is buffered until the block closes,
/// then inserted by its own operation so it is never mixed with prose.
impl ConversionState<'_> {
    pub(in crate::convert) fn code_block_event(&mut self, event: Event<'_>) {
        match event {
            Event::Text(text) => {
                if let Some(code) = self.code_block.as_mut() {
                    code.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(code) = self.code_block.take() {
                    self.close_code_block(&code);
                }
            }
            other => log::debug!("ignoring {other:?} inside code block"),
        }
    }

    /// Writes the block without its final newline, styled monospace on the
    /// code background, then ends its paragraph with a prose newline.
    fn close_code_block(&mut self, code: &str) {
        let body = code.strip_suffix('\n').unwrap_or(code);

        self.text.end_line();
        self.begin_item_content();
        let start = self.text.cursor();
        let len = text_len(body);
        self.guard_bleed(start, start + len);

        self.log.insert_text(start, body);
        let code_style = &self.profile.code;
        self.log.text_style(
            start,
            start + len,
            TextStyle::monospace(code_style.font_family.as_str())
                .with_background(code_style.block_background),
        );
        self.text.skip(len, body.ends_with('\n'));
        self.text.insert_text("\n");
    }
}
