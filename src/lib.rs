//! # multihot
//!
//! Deterministic encoding of categorical dimension names (intent, action or
//! slot names) into dense indices for NLU feature pipelines.
//!
//! ## Core Design Principles
//!
//! - **Order independence**: indices are positions in the sorted vocabulary,
//!   so any ordering of the same names yields the same encoding.
//! - **Immutability**: an encoder never changes after construction and can be
//!   shared across threads without locking.
//! - **Strict lookups**: index encoding fails on unknown names; there is no
//!   fallback bucket.
//!
//! ## Quick Start
//!
//! ```rust
//! use multihot::{IndexEncoder, MultiHotEncoder};
//!
//! let encoder = MultiHotEncoder::new(["greet", "bye", "ask"])?;
//!
//! assert_eq!(encoder.encode_as_index("bye")?, 1);
//! assert_eq!(encoder.encode_as_index_sequence(&["greet", "ask", "bye"])?, vec![2, 0, 1]);
//!
//! let features = encoder.encode_as_sparse_sentence_feature([("greet", 1.0)])?;
//! assert_eq!(features.features().to_dense(), vec![0.0, 0.0, 1.0]);
//! # Ok::<(), multihot::EncodingError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `encoding` — `MultiHotEncoder` and its configuration
//! - `traits` — the `IndexEncoder` lookup trait
//! - `features` — sparse rows and the feature container
//! - `error` — error kinds for construction and lookups

/// Categorical label encoders.
pub mod encoding;

/// Error types.
pub mod error;

/// Sparse feature containers.
pub mod features;

/// Index encoder trait.
pub mod traits;

pub use encoding::{HandleUnknown, MultiHotEncoder, MultiHotEncoderConfig, MultiHotEncoderParams};
pub use error::{EncodingError, LabelPosition};
pub use features::{FeatureType, Features, SparseRow};
pub use traits::IndexEncoder;
