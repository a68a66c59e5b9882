//! Collaborators consumed by the classifier.
//!
//! The classifier only needs a narrow view of its data:
//! - a training set ([`TrainingData`]) that reports its shape, whether every
//!   feature column is numeric, and hands out rows by index;
//! - a query row ([`FeatureRow`]) that reports its length, whether it is all
//!   numeric, and yields its values as floats.
//!
//! [`Dataset`] and [`Row`] are in-memory implementations of these contracts.

use std::borrow::Cow;

use ndarray::{ArrayBase, Data, Ix1};

use crate::error::Result;

pub mod feature;
pub mod table;

pub use feature::{Feature, Row};
pub use table::Dataset;

/// A borrowed view of one training example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingRow<'a, L> {
    pub features: &'a [f64],
    pub target: &'a L,
}

/// Read access to a labelled training set.
pub trait TrainingData {
    /// The class value being predicted.
    type Label;

    fn num_rows(&self) -> usize;

    fn num_features(&self) -> usize;

    /// `true` when every feature column holds floats.
    fn all_features_numeric(&self) -> bool;

    /// Returns the row at `index`.
    ///
    /// # Errors
    /// * `Error::RowOutOfRange` - If `index >= num_rows()`
    /// * `Error::NonNumericRow` - If the row has non-float features
    fn row(&self, index: usize) -> Result<TrainingRow<'_, Self::Label>>;
}

impl<T: TrainingData + ?Sized> TrainingData for &T {
    type Label = T::Label;

    fn num_rows(&self) -> usize {
        (**self).num_rows()
    }

    fn num_features(&self) -> usize {
        (**self).num_features()
    }

    fn all_features_numeric(&self) -> bool {
        (**self).all_features_numeric()
    }

    fn row(&self, index: usize) -> Result<TrainingRow<'_, Self::Label>> {
        (**self).row(index)
    }
}

/// A feature vector to classify.
pub trait FeatureRow {
    fn num_features(&self) -> usize;

    fn all_features_numeric(&self) -> bool;

    /// The values as floats, or `None` if some feature is not numeric.
    fn float_features(&self) -> Option<Cow<'_, [f64]>>;
}

impl FeatureRow for [f64] {
    fn num_features(&self) -> usize {
        self.len()
    }

    fn all_features_numeric(&self) -> bool {
        true
    }

    fn float_features(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self))
    }
}

impl FeatureRow for Vec<f64> {
    fn num_features(&self) -> usize {
        self.len()
    }

    fn all_features_numeric(&self) -> bool {
        true
    }

    fn float_features(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl<const N: usize> FeatureRow for [f64; N] {
    fn num_features(&self) -> usize {
        N
    }

    fn all_features_numeric(&self) -> bool {
        true
    }

    fn float_features(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self.as_slice()))
    }
}

impl<L> FeatureRow for TrainingRow<'_, L> {
    fn num_features(&self) -> usize {
        self.features.len()
    }

    fn all_features_numeric(&self) -> bool {
        true
    }

    fn float_features(&self) -> Option<Cow<'_, [f64]>> {
        Some(Cow::Borrowed(self.features))
    }
}

/// 1-D ndarray arrays and views; non-contiguous views are copied.
impl<S> FeatureRow for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn num_features(&self) -> usize {
        self.len()
    }

    fn all_features_numeric(&self) -> bool {
        true
    }

    fn float_features(&self) -> Option<Cow<'_, [f64]>> {
        match self.as_slice() {
            Some(values) => Some(Cow::Borrowed(values)),
            None => Some(Cow::Owned(self.to_vec())),
        }
    }
}
