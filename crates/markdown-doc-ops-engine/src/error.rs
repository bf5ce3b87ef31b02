use thiserror::Error;

/// Failures of the replay simulator. Any of these means an operation list
/// does not fit the document it was generated for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("{op} index {index} outside document [{origin}, {end}]")]
    IndexOutOfBounds {
        op: &'static str,
        index: usize,
        origin: usize,
        end: usize,
    },

    #[error("{op} range [{start}, {end}) outside document [{origin}, {doc_end}]")]
    RangeOutOfBounds {
        op: &'static str,
        start: usize,
        end: usize,
        origin: usize,
        doc_end: usize,
    },
}

/// Internal invariant violations of the converter. Conversion is
/// all-or-nothing: any of these discards the whole result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("{op} with empty or inverted range [{start}, {end})")]
    InvalidRange {
        op: &'static str,
        start: usize,
        end: usize,
    },

    #[error("content operations out of order: {op} at {index} follows index {previous}")]
    UnorderedContent {
        op: &'static str,
        index: usize,
        previous: usize,
    },

    #[error("generated operations do not replay: {0}")]
    Replay(#[from] ReplayError),
}
