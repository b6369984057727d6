use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    /// The sequence (or sub-range) holds no elements.
    #[error("cannot sort an empty sequence")]
    EmptySequence,
    /// An offset source produced a pivot offset outside the current sub-range.
    #[error("pivot offset {offset} is out of range for a sub-range of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },
    #[error("unknown pivot mode `{0}` (expected first, middle or random)")]
    UnknownPivotMode(String),
}
