//! Sparse feature rows and the feature container handed to the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Granularity of a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    /// One vector per token.
    Sequence,
    /// One vector summarising the whole example.
    Sentence,
}

impl FeatureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Sequence => "sequence",
            FeatureType::Sentence => "sentence",
        }
    }
}

/// A single sparse row of shape `(1, width)` in coordinate form.
///
/// Indices are strictly increasing and all `< width`. Entries that are not
/// stored are zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SparseRowRepr")]
pub struct SparseRow {
    width: usize,
    indices: Vec<usize>,
    values: Vec<f32>,
}

/// Unchecked wire form of [`SparseRow`].
#[derive(Deserialize)]
struct SparseRowRepr {
    width: usize,
    indices: Vec<usize>,
    values: Vec<f32>,
}

impl TryFrom<SparseRowRepr> for SparseRow {
    type Error = String;

    fn try_from(repr: SparseRowRepr) -> Result<Self, Self::Error> {
        if repr.indices.len() != repr.values.len() {
            return Err(format!(
                "sparse row has {} indices but {} values",
                repr.indices.len(),
                repr.values.len()
            ));
        }
        if repr.indices.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err("sparse row indices must be strictly increasing".to_string());
        }
        if let Some(&last) = repr.indices.last() {
            if last >= repr.width {
                return Err(format!(
                    "sparse row index {} out of bounds for width {}",
                    last, repr.width
                ));
            }
        }
        Ok(Self {
            width: repr.width,
            indices: repr.indices,
            values: repr.values,
        })
    }
}

impl SparseRow {
    /// An all-zero row.
    pub fn zeros(width: usize) -> Self {
        Self {
            width,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from an index-ordered map. Callers guarantee every key is `< width`.
    pub(crate) fn from_sorted(width: usize, entries: BTreeMap<usize, f32>) -> Self {
        debug_assert!(entries.keys().all(|&i| i < width));
        let (indices, values) = entries.into_iter().unzip();
        Self {
            width,
            indices,
            values,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn shape(&self) -> (usize, usize) {
        (1, self.width)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value at `index`, zero if nothing is stored there or the index is out of range.
    pub fn get(&self, index: usize) -> f32 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Stored `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn to_dense(&self) -> Vec<f32> {
        let mut dense = vec![0.0f32; self.width];
        for (index, value) in self.iter() {
            dense[index] = value;
        }
        dense
    }

    /// Dense copy as an `ndarray` vector.
    #[cfg(feature = "ndarray")]
    pub fn to_array(&self) -> ndarray::Array1<f32> {
        ndarray::Array1::from(self.to_dense())
    }
}

/// Features produced by a featurizer, tagged with where they came from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Features {
    features: SparseRow,
    feature_type: FeatureType,
    attribute: Option<String>,
    origin: String,
}

impl Features {
    pub fn new(
        features: SparseRow,
        feature_type: FeatureType,
        attribute: Option<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            features,
            feature_type,
            attribute,
            origin: origin.into(),
        }
    }

    pub fn features(&self) -> &SparseRow {
        &self.features
    }

    pub fn into_features(self) -> SparseRow {
        self.features
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    /// Message attribute the features describe, if one was configured.
    pub fn attribute(&self) -> Option<&str> {
        self.attribute.as_deref()
    }

    /// Name of the component that produced the features.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
