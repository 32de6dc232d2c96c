//! Error types for encoding operations.

use std::fmt;
use thiserror::Error;

/// Where an unknown label was found in the caller's input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPosition {
    /// A single lookup with no surrounding sequence.
    #[default]
    Unlocated,
    /// Position `index` in a flat sequence.
    Sequence { index: usize },
    /// Position `index` inside batch number `batch`.
    Batch { batch: usize, index: usize },
}

impl LabelPosition {
    /// Nest a sequence position inside the given batch.
    pub fn in_batch(self, batch: usize) -> Self {
        match self {
            LabelPosition::Sequence { index } | LabelPosition::Batch { index, .. } => {
                LabelPosition::Batch { batch, index }
            }
            LabelPosition::Unlocated => LabelPosition::Unlocated,
        }
    }
}

impl fmt::Display for LabelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelPosition::Unlocated => Ok(()),
            LabelPosition::Sequence { index } => write!(f, " (at position {})", index),
            LabelPosition::Batch { batch, index } => {
                write!(f, " (in batch {} at position {})", batch, index)
            }
        }
    }
}

/// Error type for encoder construction and encoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// The supplied dimension names were not unique.
    #[error("Expected the dimension names to be unique, got duplicates {duplicates:?}")]
    DuplicateLabels {
        /// Every label that occurred more than once, sorted, listed once.
        duplicates: Vec<String>,
    },
    /// A queried dimension name is not part of the vocabulary.
    #[error(
        "Expected given dimension name to be one of {vocabulary:?} but was given `{label}`{position}"
    )]
    UnknownLabel {
        /// The offending label.
        label: String,
        /// The full vocabulary in sorted order.
        vocabulary: Vec<String>,
        /// Where in the input the label was found.
        position: LabelPosition,
    },
}

impl EncodingError {
    /// True for errors raised while validating the vocabulary at construction.
    pub fn is_configuration(&self) -> bool {
        matches!(self, EncodingError::DuplicateLabels { .. })
    }

    /// True for lookups of a label outside the vocabulary.
    pub fn is_unknown_label(&self) -> bool {
        matches!(self, EncodingError::UnknownLabel { .. })
    }

    /// Attach an input position to an unknown-label error.
    pub(crate) fn at(self, position: LabelPosition) -> Self {
        match self {
            EncodingError::UnknownLabel {
                label, vocabulary, ..
            } => EncodingError::UnknownLabel {
                label,
                vocabulary,
                position,
            },
            other => other,
        }
    }

    /// Move a sequence-level position into the given batch.
    pub(crate) fn in_batch(self, batch: usize) -> Self {
        match self {
            EncodingError::UnknownLabel {
                label,
                vocabulary,
                position,
            } => EncodingError::UnknownLabel {
                label,
                vocabulary,
                position: position.in_batch(batch),
            },
            other => other,
        }
    }
}
