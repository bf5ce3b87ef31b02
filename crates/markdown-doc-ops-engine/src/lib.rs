//! Converts Markdown into ordered, position-addressed edit operations for a
//! structured document backend.
//!
//! ```
//! use markdown_doc_ops_engine::{Operation, convert};
//!
//! let ops = convert("Hello", 1).unwrap();
//! assert_eq!(
//!     ops,
//!     vec![Operation::InsertText { index: 1, text: "Hello\n".into() }]
//! );
//! ```

pub mod convert;
pub mod error;
pub mod ops;
pub mod replay;

pub use convert::{Converted, DEFAULT_START_INDEX, MarkdownConverter, convert, parser_options};
pub use error::{ConvertError, ReplayError};
pub use markdown_doc_ops_config::BackendProfile;
pub use ops::{BatchUpdate, BulletPreset, Operation, Request, TextRange};
pub use replay::FlatDocument;
