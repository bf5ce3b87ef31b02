//! # Block Handlers
//!
//! Each block construct gets its own `impl ConversionState` block, called from
//! the event dispatch in `state`. Handlers only ever append: prose goes to the
//! shared text accumulator, everything else to the operation log.
//!
//! ## Modules
//!
//! - **`paragraph`**: paragraph close, the newline every block ends with
//! - **`heading`**: `HEADING_n` paragraph styles
//! - **`list`**: nesting TABs, bullet ranges, task markers and the bleed guard
//! - **`blockquote`**: indent, left border and italics per quoted paragraph
//! - **`code`**: fenced and indented code blocks inserted on their own
//! - **`table`**: cell buffering and the grid index calculator
//! - **`rule`**: horizontal rules as bottom-bordered empty paragraphs
//! - **`image`**: inline images
//!
//! ## Key Invariants
//!
//! - A construct ends on a line of its own: handlers close the current line
//!   before starting block content and append `\n` after it.
//! - Paragraphs that follow a list get their bullets cleared explicitly.

pub mod blockquote;
pub mod code;
pub mod heading;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod table;

pub use blockquote::BlockquoteContext;
pub use heading::OpenHeading;
pub use list::{ListContext, ListKind};
pub use table::{PlacedCell, TableBuffer, TableGrid, TableLayout};
