//! Multi-hot encoding of categorical dimension names.
//!
//! Maps each dimension name of a fixed vocabulary to its position in sorted
//! order, so every ordering of the same names yields the same encoding.

use crate::encoding::HandleUnknown;
use crate::error::{EncodingError, LabelPosition};
use crate::features::{FeatureType, Features, SparseRow};
use crate::traits::IndexEncoder;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, trace};

/// Origin recorded on every [`Features`] this encoder produces.
pub const ORIGIN: &str = "MultiHotEncoder";

/// Configuration for MultiHotEncoder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiHotEncoderConfig {
    /// Message attribute attached to produced features.
    pub attribute: Option<String>,
    /// What the sparse path does with unknown labels. Index lookups always fail on them.
    pub sparse_handle_unknown: HandleUnknown,
}

impl Default for MultiHotEncoderConfig {
    fn default() -> Self {
        Self {
            attribute: None,
            sparse_handle_unknown: HandleUnknown::Ignore,
        }
    }
}

/// Serializable parameters for a MultiHotEncoder.
///
/// Persisting these (with any serde format) and passing them to
/// [`MultiHotEncoder::from_params`] reproduces the exact same indices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiHotEncoderParams {
    /// Dimension names in index order.
    pub dimension_names: Vec<String>,
    /// Configuration options.
    pub config: MultiHotEncoderConfig,
}

/// Deterministic encoder from dimension names to indices.
///
/// The encoder is immutable once built and can be shared across threads.
///
/// # Example
/// ```
/// use multihot::{IndexEncoder, MultiHotEncoder};
///
/// let encoder = MultiHotEncoder::new(["greet", "bye", "ask"])?;
///
/// assert_eq!(encoder.dimension_names(), &["ask", "bye", "greet"]);
/// assert_eq!(encoder.encode_as_index("bye")?, 1);
/// assert_eq!(
///     encoder.encode_as_sequence_of_index_sequences(&[vec!["greet"], vec!["ask", "bye"]])?,
///     vec![vec![2], vec![0, 1]]
/// );
/// assert!(encoder.encode_as_index("thanks").is_err());
/// # Ok::<(), multihot::EncodingError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiHotEncoder {
    /// Dimension names sorted ascending; position is the index.
    dimension_names: Vec<String>,
    name_to_index: HashMap<String, usize>,
    config: MultiHotEncoderConfig,
}

impl MultiHotEncoder {
    /// Create an encoder from unique dimension names given in any order.
    ///
    /// # Errors
    /// Returns [`EncodingError::DuplicateLabels`] if a name occurs more than once.
    pub fn new<I, S>(dimension_names: I) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new_with_config(dimension_names, MultiHotEncoderConfig::default())
    }

    /// Create an encoder with explicit configuration.
    pub fn new_with_config<I, S>(
        dimension_names: I,
        config: MultiHotEncoderConfig,
    ) -> Result<Self, EncodingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = dimension_names.into_iter().map(Into::into).collect();
        names.sort();

        let mut duplicates: Vec<String> = names
            .windows(2)
            .filter(|pair| pair[0] == pair[1])
            .map(|pair| pair[0].clone())
            .collect();
        duplicates.dedup();
        if !duplicates.is_empty() {
            debug!(?duplicates, "rejecting non-unique dimension names");
            return Err(EncodingError::DuplicateLabels { duplicates });
        }

        let name_to_index = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();

        debug!(
            dimension = names.len(),
            attribute = ?config.attribute,
            "built multi-hot encoder"
        );

        Ok(Self {
            dimension_names: names,
            name_to_index,
            config,
        })
    }

    /// Set the attribute recorded on produced features.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.config.attribute = Some(attribute.into());
        self
    }

    /// Set the strategy for unknown labels in the sparse path.
    pub fn with_sparse_handle_unknown(mut self, strategy: HandleUnknown) -> Self {
        self.config.sparse_handle_unknown = strategy;
        self
    }

    /// Dimension names in index order.
    pub fn dimension_names(&self) -> &[String] {
        &self.dimension_names
    }

    pub fn config(&self) -> &MultiHotEncoderConfig {
        &self.config
    }

    pub fn attribute(&self) -> Option<&str> {
        self.config.attribute.as_deref()
    }

    pub fn contains(&self, dimension_name: &str) -> bool {
        self.name_to_index.contains_key(dimension_name)
    }

    /// Dimension name at `index`, if in range.
    pub fn decode_index(&self, index: usize) -> Option<&str> {
        self.dimension_names.get(index).map(String::as_str)
    }

    /// `(dimension name, index)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.dimension_names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
    }

    /// Encode label/value pairs as a sparse sentence feature of width `dimension()`.
    ///
    /// Each known label puts its value at its index; all other entries are zero.
    /// When a label repeats, the last value wins. Unknown labels are skipped
    /// unless the encoder was configured with [`HandleUnknown::Error`], unlike
    /// the index lookups which always fail on them.
    pub fn encode_as_sparse_sentence_feature<I, S>(
        &self,
        dimension_names_to_values: I,
    ) -> Result<Features, EncodingError>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: AsRef<str>,
    {
        let mut entries = BTreeMap::new();
        for (name, value) in dimension_names_to_values {
            let name = name.as_ref();
            match self.name_to_index.get(name) {
                Some(&idx) => {
                    entries.insert(idx, value);
                }
                None => match self.config.sparse_handle_unknown {
                    HandleUnknown::Error => return Err(self.unknown(name)),
                    HandleUnknown::Ignore => {
                        trace!(dimension_name = name, "skipping unknown dimension name")
                    }
                },
            }
        }

        Ok(Features::new(
            SparseRow::from_sorted(self.dimension(), entries),
            FeatureType::Sentence,
            self.config.attribute.clone(),
            ORIGIN,
        ))
    }

    /// Like [`IndexEncoder::encode_as_index_sequence`], as an `ndarray` vector.
    #[cfg(feature = "ndarray")]
    pub fn encode_as_index_array<S: AsRef<str>>(
        &self,
        dimension_names: &[S],
    ) -> Result<ndarray::Array1<usize>, EncodingError> {
        self.encode_as_index_sequence(dimension_names)
            .map(ndarray::Array1::from)
    }

    /// Like [`IndexEncoder::encode_as_sequence_of_index_sequences`], one `ndarray` vector per batch.
    #[cfg(feature = "ndarray")]
    pub fn encode_as_array_of_index_arrays<S, V>(
        &self,
        dimension_names: &[V],
    ) -> Result<Vec<ndarray::Array1<usize>>, EncodingError>
    where
        S: AsRef<str>,
        V: AsRef<[S]>,
    {
        Ok(self
            .encode_as_sequence_of_index_sequences(dimension_names)?
            .into_iter()
            .map(ndarray::Array1::from)
            .collect())
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> MultiHotEncoderParams {
        MultiHotEncoderParams {
            dimension_names: self.dimension_names.clone(),
            config: self.config.clone(),
        }
    }

    /// Reconstruct from parameters. The names are validated as on construction.
    pub fn from_params(params: MultiHotEncoderParams) -> Result<Self, EncodingError> {
        Self::new_with_config(params.dimension_names, params.config)
    }

    fn unknown(&self, dimension_name: &str) -> EncodingError {
        EncodingError::UnknownLabel {
            label: dimension_name.to_string(),
            vocabulary: self.dimension_names.clone(),
            position: LabelPosition::Unlocated,
        }
    }
}

impl IndexEncoder for MultiHotEncoder {
    fn dimension(&self) -> usize {
        self.dimension_names.len()
    }

    fn encode_as_index(&self, dimension_name: &str) -> Result<usize, EncodingError> {
        self.name_to_index
            .get(dimension_name)
            .copied()
            .ok_or_else(|| self.unknown(dimension_name))
    }
}
