//! Categorical label encoders.
//!
//! ## MultiHotEncoder
//! Assigns every dimension name of a fixed vocabulary a stable index (its
//! position in sorted order) and encodes labels, label sequences and ragged
//! batches of label sequences into those indices. It also builds sparse
//! sentence features from label/value pairs.
//!
//! ```text
//! vocabulary {"greet", "bye", "ask"}  ->  ask: 0, bye: 1, greet: 2
//! ["greet", "ask", "bye"]             ->  [2, 0, 1]
//! [["greet"], ["ask", "bye"]]         ->  [[2], [0, 1]]
//! ```

mod multi_hot;

pub use multi_hot::{
    MultiHotEncoder, MultiHotEncoderConfig, MultiHotEncoderParams, ORIGIN as MULTI_HOT_ORIGIN,
};

/// Strategy for handling unknown labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum HandleUnknown {
    /// Fail when an unknown label is encountered.
    #[default]
    Error,
    /// Skip unknown labels.
    Ignore,
}
