//! Reference backend wire format.
//!
//! Each [`Operation`] becomes a single-key request object
//! (`insertText`, `updateTextStyle`, ...) and a list of them is sent as the
//! `requests` array of one batch update.

use serde::Serialize;

use super::{BulletPreset, ImageSize, Operation, ParagraphStyle, TextRange, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl From<TextRange> for WireRange {
    fn from(range: TextRange) -> Self {
        Self {
            start_index: range.start,
            end_index: range.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertTextRequest {
    pub location: Location,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTextStyleRequest {
    pub range: WireRange,
    pub text_style: TextStyle,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParagraphStyleRequest {
    pub range: WireRange,
    pub paragraph_style: ParagraphStyle,
    pub fields: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParagraphBulletsRequest {
    pub range: WireRange,
    pub bullet_preset: BulletPreset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteParagraphBulletsRequest {
    pub range: WireRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertTableRequest {
    pub location: Location,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertInlineImageRequest {
    pub location: Location,
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_size: Option<ImageSize>,
}

/// A single request object of a batch update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Request {
    InsertText(InsertTextRequest),
    UpdateTextStyle(UpdateTextStyleRequest),
    UpdateParagraphStyle(UpdateParagraphStyleRequest),
    CreateParagraphBullets(CreateParagraphBulletsRequest),
    DeleteParagraphBullets(DeleteParagraphBulletsRequest),
    InsertTable(InsertTableRequest),
    InsertInlineImage(InsertInlineImageRequest),
}

impl Operation {
    pub fn to_request(&self) -> Request {
        match self {
            Operation::InsertText { index, text } => Request::InsertText(InsertTextRequest {
                location: Location { index: *index },
                text: text.clone(),
            }),
            Operation::ApplyTextStyle { range, style } => {
                Request::UpdateTextStyle(UpdateTextStyleRequest {
                    range: (*range).into(),
                    text_style: style.clone(),
                    fields: style.fields().join(","),
                })
            }
            Operation::ApplyParagraphStyle { range, style } => {
                Request::UpdateParagraphStyle(UpdateParagraphStyleRequest {
                    range: (*range).into(),
                    paragraph_style: style.clone(),
                    fields: style.fields().join(","),
                })
            }
            Operation::CreateListBullets { range, preset } => {
                Request::CreateParagraphBullets(CreateParagraphBulletsRequest {
                    range: (*range).into(),
                    bullet_preset: *preset,
                })
            }
            Operation::ClearListBullets { range } => {
                Request::DeleteParagraphBullets(DeleteParagraphBulletsRequest {
                    range: (*range).into(),
                })
            }
            Operation::InsertTable { index, rows, cols } => Request::InsertTable(InsertTableRequest {
                location: Location { index: *index },
                rows: *rows,
                columns: *cols,
            }),
            Operation::InsertInlineImage { index, uri, size } => {
                Request::InsertInlineImage(InsertInlineImageRequest {
                    location: Location { index: *index },
                    uri: uri.clone(),
                    object_size: *size,
                })
            }
        }
    }
}

/// Body of a batch update: `{"requests": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchUpdate {
    pub requests: Vec<Request>,
}

impl BatchUpdate {
    pub fn from_operations(operations: &[Operation]) -> Self {
        Self {
            requests: operations.iter().map(Operation::to_request).collect(),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
