//! Error types shared by the dataset collaborators and the k-NN classifier.

use thiserror::Error;

/// Errors raised while building datasets, training or classifying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A classifier was constructed with `k < 1`.
    #[error("invalid number of neighbours {k}")]
    InvalidNumberOfNeighbours { k: usize },

    /// A bounded neighbour collection was asked to hold fewer than one entry.
    #[error("invalid neighbour collection capacity {capacity}")]
    InvalidCapacity { capacity: usize },

    /// The training set reports a non-float feature column.
    #[error("cannot train on dataset with some non-float features")]
    NonNumericTrainingFeatures,

    /// The training set has no rows.
    #[error("cannot train on an empty dataset")]
    EmptyTrainingDataset,

    /// `classify` was called before a successful `train`.
    #[error("cannot classify before training")]
    UntrainedClassifier,

    /// The query length differs from the training set's feature count.
    #[error("test row has {test_row_features} features, training set has {training_set_features}")]
    RowLengthMismatch {
        test_row_features: usize,
        training_set_features: usize,
    },

    /// The query holds a non-float feature.
    #[error("cannot classify row with some non-float features")]
    NonNumericTestRowFeatures,

    /// A row index at or past the end of the dataset.
    #[error("row index {index} out of range for dataset with {num_rows} rows")]
    RowOutOfRange { index: usize, num_rows: usize },

    /// A vote was requested before any neighbour was retained.
    #[error("cannot vote with an empty neighbour collection")]
    EmptyNeighbourCollection,

    /// Numeric access to a row of a table that holds non-float cells.
    #[error("row {index} has some non-float features")]
    NonNumericRow { index: usize },

    /// A dataset builder got a different number of labels than feature rows.
    #[error("dataset has {rows} rows but {labels} labels")]
    LabelCountMismatch { rows: usize, labels: usize },

    /// A row passed to a dataset builder has the wrong number of features.
    #[error("row {row} has {found} features, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// [`accuracy`](crate::KNNClassifier::accuracy) was given a test set with no rows.
    #[error("cannot score against an empty test dataset")]
    EmptyTestDataset,
}

/// Result type for dataset and classifier operations
pub type Result<T> = std::result::Result<T, Error>;
