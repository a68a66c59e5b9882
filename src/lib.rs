pub mod dataset;
pub mod error;
pub mod ml;

pub use dataset::{Dataset, Feature, FeatureRow, Row, TrainingData, TrainingRow};
pub use error::{Error, Result};
pub use ml::classic::KNNClassifier;
