//! Tables are inserted as an empty grid and then filled cell by cell.
//!
//! Cell positions come from [`TableGeometry`]: the grid occupies a fixed
//! number of units per cell, row and table, and every cell already filled
//! pushes later cells right by the length of its text.

use markdown_doc_ops_config::TableGeometry;
use pulldown_cmark::{Event, Tag, TagEnd};

use crate::{
    convert::{cursor::text_len, state::ConversionState},
    ops::TextStyle,
};

/// Cell text collected while a table is open.
#[derive(Debug, Default)]
pub struct TableBuffer {
    rows: Vec<Vec<String>>,
}

impl TableBuffer {
    pub fn start_row(&mut self) {
        self.rows.push(Vec::new());
    }

    pub fn start_cell(&mut self) {
        match self.rows.last_mut() {
            Some(row) => row.push(String::new()),
            None => self.rows.push(vec![String::new()]),
        }
    }

    /// Appends to the current cell. Text outside any cell is dropped.
    pub fn push_text(&mut self, text: &str) {
        if let Some(cell) = self.rows.last_mut().and_then(|row| row.last_mut()) {
            cell.push_str(text);
        }
    }

    /// Rectangular grid of trimmed cell text; short rows are padded with
    /// empty cells.
    pub fn into_grid(self) -> TableGrid {
        let cols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = self
            .rows
            .into_iter()
            .map(|row| {
                let mut row: Vec<String> = row.iter().map(|c| c.trim().to_string()).collect();
                row.resize(cols, String::new());
                row
            })
            .collect();
        TableGrid { cols, cells }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    pub cols: usize,
    /// Row-major; row 0 is the header.
    pub cells: Vec<Vec<String>>,
}

impl TableGrid {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }
}

/// A cell's text and where it is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    pub row: usize,
    pub col: usize,
    pub index: usize,
    pub text: String,
}

/// Index arithmetic for an `rows x cols` table inserted at `start`.
#[derive(Debug, Clone, Copy)]
pub struct TableLayout<'g> {
    geometry: &'g TableGeometry,
    start: usize,
    rows: usize,
    cols: usize,
}

impl<'g> TableLayout<'g> {
    pub fn new(geometry: &'g TableGeometry, start: usize, rows: usize, cols: usize) -> Self {
        Self {
            geometry,
            start,
            rows,
            cols,
        }
    }

    fn row_width(&self) -> usize {
        self.geometry.cell_stride * self.cols + self.geometry.row_overhead
    }

    /// Content position of cell `(row, col)` in the empty grid.
    pub fn cell_base(&self, row: usize, col: usize) -> usize {
        self.start + self.geometry.cell_offset + row * self.row_width() + col * self.geometry.cell_stride
    }

    /// Units occupied by the empty grid.
    pub fn size(&self) -> usize {
        self.geometry.frame_overhead + self.rows * self.row_width()
    }

    /// Insert positions for every non-empty cell, in row-major order, and the
    /// index just past the filled table.
    pub fn place(&self, grid: &TableGrid) -> (Vec<PlacedCell>, usize) {
        let mut placed = Vec::new();
        let mut text_offset = 0;
        for (row, cells) in grid.cells.iter().enumerate() {
            for (col, text) in cells.iter().enumerate() {
                if text.is_empty() {
                    continue;
                }
                placed.push(PlacedCell {
                    row,
                    col,
                    index: self.cell_base(row, col) + text_offset,
                    text: text.clone(),
                });
                text_offset += text_len(text);
            }
        }
        (placed, self.start + self.size() + text_offset)
    }
}

impl ConversionState<'_> {
    /// A table never carries bullets, so it consumes a pending bleed check
    /// without clearing anything.
    pub(in crate::convert) fn open_table(&mut self) {
        self.lists.take_just_exited();
        self.text.end_line();
        self.table = Some(TableBuffer::default());
    }

    /// Cells are flattened to plain text; inline styling inside a table is
    /// dropped.
    pub(in crate::convert) fn table_event(&mut self, event: Event<'_>) {
        let Some(table) = self.table.as_mut() else {
            return;
        };
        match event {
            Event::Start(Tag::TableHead | Tag::TableRow) => table.start_row(),
            Event::Start(Tag::TableCell) => table.start_cell(),
            Event::Text(text) | Event::Code(text) => table.push_text(&text),
            Event::SoftBreak | Event::HardBreak => table.push_text(" "),
            Event::End(TagEnd::Table) => self.close_table(),
            other => log::debug!("ignoring {other:?} inside table"),
        }
    }

    fn close_table(&mut self) {
        let Some(table) = self.table.take() else {
            return;
        };
        let grid = table.into_grid();
        if grid.rows() == 0 || grid.cols == 0 {
            log::warn!("skipping table without cells");
            return;
        }

        let start = self.text.cursor();
        let layout = TableLayout::new(&self.profile.table, start, grid.rows(), grid.cols);
        let (cells, end) = layout.place(&grid);

        self.log.insert_table(start, grid.rows(), grid.cols);
        for cell in cells {
            let len = text_len(&cell.text);
            if cell.row == 0 {
                self.log
                    .text_style(cell.index, cell.index + len, TextStyle::bold());
            }
            self.log.insert_text(cell.index, cell.text);
        }
        self.text.skip(end - start, false);
        self.text.insert_text("\n");
    }
}
