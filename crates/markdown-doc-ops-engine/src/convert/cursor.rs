/// Length of `s` in document units (UTF-16 code units).
pub fn text_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Document cursor plus the buffer that becomes the single prose insertion.
///
/// Prose goes through [`insert_text`](Self::insert_text) and lands in the
/// buffer. Content inserted by its own operation (code, table cells, images)
/// only moves the cursor via [`skip`](Self::skip); the buffer stays contiguous
/// and the backend fills the gaps when those operations are applied in order.
#[derive(Debug)]
pub struct TextAccumulator {
    origin: usize,
    cursor: usize,
    buffer: String,
    at_line_start: bool,
}

impl TextAccumulator {
    pub fn new(origin: usize) -> Self {
        Self {
            origin,
            cursor: origin,
            buffer: String::new(),
            at_line_start: true,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when nothing has been written since the last newline.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Appends prose and advances the cursor. Empty input is a no-op.
    pub fn insert_text(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.buffer.push_str(s);
        self.cursor += text_len(s);
        self.at_line_start = s.ends_with('\n');
    }

    /// Advances past `units` of content inserted by a separate operation.
    /// `ends_line` tells whether that content ended with a newline.
    pub fn skip(&mut self, units: usize, ends_line: bool) {
        if units == 0 {
            return;
        }
        self.cursor += units;
        self.at_line_start = ends_line;
    }

    /// Terminates the current line unless the cursor already sits at a line start.
    pub fn end_line(&mut self) {
        if !self.at_line_start {
            self.insert_text("\n");
        }
    }

    /// The prose insertion, if any prose was written.
    pub fn finish(self) -> Option<(usize, String)> {
        (!self.buffer.is_empty()).then_some((self.origin, self.buffer))
    }
}
