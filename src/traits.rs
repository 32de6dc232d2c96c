//! Core trait for index encoders.
//!
//! [`IndexEncoder`] needs only a single-label lookup; encoding flat sequences
//! and ragged batches of sequences is provided on top of it, including the
//! bookkeeping that records where an unknown label was found.

use crate::error::{EncodingError, LabelPosition};

/// Maps labels of a fixed vocabulary to dense indices in `[0, dimension())`.
///
/// # Example
/// ```
/// use multihot::{IndexEncoder, MultiHotEncoder};
///
/// let encoder = MultiHotEncoder::new(["greet", "bye", "ask"])?;
/// assert_eq!(encoder.encode_as_index("bye")?, 1);
/// assert_eq!(encoder.encode_as_index_sequence(&["greet", "ask"])?, vec![2, 0]);
/// # Ok::<(), multihot::EncodingError>(())
/// ```
pub trait IndexEncoder {
    /// Number of labels in the vocabulary.
    fn dimension(&self) -> usize;

    /// Look up the index of a single label.
    ///
    /// # Errors
    /// Returns [`EncodingError::UnknownLabel`] if the label is not in the vocabulary.
    fn encode_as_index(&self, label: &str) -> Result<usize, EncodingError>;

    /// Encode every label of a sequence, preserving order.
    ///
    /// Stops at the first unknown label and reports its position.
    fn encode_as_index_sequence<S: AsRef<str>>(
        &self,
        labels: &[S],
    ) -> Result<Vec<usize>, EncodingError> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| {
                self.encode_as_index(label.as_ref())
                    .map_err(|e| e.at(LabelPosition::Sequence { index }))
            })
            .collect()
    }

    /// Encode a batch of label sequences. Inner sequences may differ in length.
    ///
    /// Stops at the first unknown label and reports the batch and position.
    fn encode_as_sequence_of_index_sequences<S, V>(
        &self,
        batches: &[V],
    ) -> Result<Vec<Vec<usize>>, EncodingError>
    where
        S: AsRef<str>,
        V: AsRef<[S]>,
    {
        batches
            .iter()
            .enumerate()
            .map(|(batch, labels)| {
                self.encode_as_index_sequence(labels.as_ref())
                    .map_err(|e| e.in_batch(batch))
            })
            .collect()
    }
}
