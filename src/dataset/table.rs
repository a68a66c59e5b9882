use log::debug;
use ndarray::Array2;

use super::{Feature, Row, TrainingData, TrainingRow};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
enum Storage {
    /// Row-major values, `num_features` per row.
    Numeric(Vec<f64>),
    Mixed(Vec<Row>),
}

/// An in-memory labelled dataset.
///
/// A dataset whose cells are all floats is stored as one contiguous row-major
/// buffer, so [`TrainingData::row`] hands out borrowed slices without
/// allocating. A dataset with any text cell keeps its typed rows; it reports
/// `all_features_numeric() == false` and its numeric row access fails with
/// `Error::NonNumericRow`.
///
/// # Examples
/// ```
/// use knn::dataset::{Dataset, TrainingData};
/// use ndarray::array;
///
/// let data = Dataset::from_array(array![[0.0, 0.0], [10.0, 10.0]], vec!["A", "B"]).unwrap();
/// assert_eq!(data.num_rows(), 2);
/// assert_eq!(data.row(1).unwrap().target, &"B");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<L> {
    num_features: usize,
    storage: Storage,
    labels: Vec<L>,
}

impl<L> Dataset<L> {
    /// Builds a numeric dataset from a `(rows, features)` matrix.
    ///
    /// # Errors
    /// * `Error::LabelCountMismatch` - If `labels.len()` differs from the number of matrix rows
    pub fn from_array(features: Array2<f64>, labels: Vec<L>) -> Result<Self> {
        let (rows, num_features) = features.dim();
        if rows != labels.len() {
            return Err(Error::LabelCountMismatch {
                rows,
                labels: labels.len(),
            });
        }

        // Logical iteration order is row-major whatever the memory layout.
        let values = features.iter().copied().collect();
        debug!("built numeric dataset with {rows} rows and {num_features} features");

        Ok(Self {
            num_features,
            storage: Storage::Numeric(values),
            labels,
        })
    }

    /// Builds a dataset from typed rows.
    ///
    /// # Errors
    /// * `Error::RaggedRow` - If a row does not have exactly `num_features` features
    pub fn from_rows<I>(num_features: usize, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Row, L)>,
    {
        let mut typed = Vec::new();
        let mut labels = Vec::new();
        for (index, (row, label)) in rows.into_iter().enumerate() {
            let found = row.features().len();
            if found != num_features {
                return Err(Error::RaggedRow {
                    row: index,
                    expected: num_features,
                    found,
                });
            }
            typed.push(row);
            labels.push(label);
        }

        let numeric = typed
            .iter()
            .flat_map(Row::features)
            .map(Feature::as_float)
            .collect::<Option<Vec<f64>>>();

        let storage = match numeric {
            Some(values) => Storage::Numeric(values),
            None => Storage::Mixed(typed),
        };
        debug!(
            "built dataset with {} rows and {num_features} features (numeric: {})",
            labels.len(),
            matches!(storage, Storage::Numeric(_))
        );

        Ok(Self {
            num_features,
            storage,
            labels,
        })
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<L> TrainingData for Dataset<L> {
    type Label = L;

    fn num_rows(&self) -> usize {
        self.labels.len()
    }

    fn num_features(&self) -> usize {
        self.num_features
    }

    fn all_features_numeric(&self) -> bool {
        matches!(self.storage, Storage::Numeric(_))
    }

    fn row(&self, index: usize) -> Result<TrainingRow<'_, L>> {
        let target = self.labels.get(index).ok_or(Error::RowOutOfRange {
            index,
            num_rows: self.labels.len(),
        })?;

        match &self.storage {
            Storage::Numeric(values) => {
                let start = index * self.num_features;
                Ok(TrainingRow {
                    features: &values[start..start + self.num_features],
                    target,
                })
            }
            Storage::Mixed(_) => Err(Error::NonNumericRow { index }),
        }
    }
}
