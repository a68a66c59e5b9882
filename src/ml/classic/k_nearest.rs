use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::dataset::{FeatureRow, TrainingData};
use crate::error::{Error, Result};

pub mod distance;
pub mod neighbours;

use distance::euclidean;
use neighbours::BoundedNeighbourCollection;

/// A k-NN classifier that borrows its training data and predicts by majority vote
/// among the `k` nearest training rows under Euclidean distance.
///
/// # Type Parameters
/// - `D`: the training data. Any [`TrainingData`], including trait objects.
///   Its `Label` must be `Clone + PartialEq` to classify.
///
/// # Fields
/// - `k`: number of neighbours to consider, fixed at construction.
/// - `training_data`: the dataset set by [`train`](Self::train), borrowed for `'a`.
///   It is never copied or modified.
///
/// Classification only reads the training data and owns its neighbour
/// collection, so a trained classifier can be shared across threads when `D`
/// is `Sync`.
#[derive(Debug)]
pub struct KNNClassifier<'a, D: ?Sized> {
    k: usize,
    training_data: Option<&'a D>,
}

impl<D: ?Sized> Clone for KNNClassifier<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for KNNClassifier<'_, D> {}

impl<'a, D: TrainingData + ?Sized> KNNClassifier<'a, D> {
    /// Constructs an untrained `KNNClassifier`.
    ///
    /// # Errors
    /// * `Error::InvalidNumberOfNeighbours` - If `k == 0`
    pub fn new(k: usize) -> Result<Self> {
        if k < 1 {
            return Err(Error::InvalidNumberOfNeighbours { k });
        }

        debug!("created k-NN classifier with k = {k}");
        Ok(Self {
            k,
            training_data: None,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn is_trained(&self) -> bool {
        self.training_data.is_some()
    }

    pub fn training_data(&self) -> Option<&'a D> {
        self.training_data
    }

    /// Trains the classifier by keeping a reference to `training_data`.
    ///
    /// Training again replaces the previous dataset. On error the classifier
    /// keeps whatever dataset it had before.
    ///
    /// # Errors
    /// * `Error::NonNumericTrainingFeatures` - If some feature column is not numeric
    /// * `Error::EmptyTrainingDataset` - If the dataset has no rows
    pub fn train(&mut self, training_data: &'a D) -> Result<()> {
        if !training_data.all_features_numeric() {
            return Err(Error::NonNumericTrainingFeatures);
        }

        if training_data.num_rows() == 0 {
            return Err(Error::EmptyTrainingDataset);
        }

        debug!(
            "trained k-NN classifier on {} rows with {} features",
            training_data.num_rows(),
            training_data.num_features()
        );
        self.training_data = Some(training_data);
        Ok(())
    }

    /// Scans the training data and returns the `k` rows nearest to `query`.
    ///
    /// Rows are visited in dataset order. Before each row the distance bound is
    /// read from the collection, and the row is kept only if it is strictly
    /// closer than that bound; rows at or beyond it are skipped, usually
    /// without finishing their distance computation.
    ///
    /// # Errors
    /// * `Error::UntrainedClassifier` - If [`train`](Self::train) has not succeeded
    /// * `Error::RowLengthMismatch` - If `query` and the training data differ in feature count
    /// * `Error::NonNumericTestRowFeatures` - If `query` has a non-numeric feature
    /// * Any error returned by the training data's row access, which aborts the scan
    pub fn nearest_neighbours<Q>(&self, query: &Q) -> Result<BoundedNeighbourCollection<D::Label>>
    where
        Q: FeatureRow + ?Sized,
        D::Label: Clone,
    {
        let training_data = self.training_data.ok_or(Error::UntrainedClassifier)?;

        if query.num_features() != training_data.num_features() {
            return Err(Error::RowLengthMismatch {
                test_row_features: query.num_features(),
                training_set_features: training_data.num_features(),
            });
        }

        if !query.all_features_numeric() {
            return Err(Error::NonNumericTestRowFeatures);
        }
        let query_values = query
            .float_features()
            .ok_or(Error::NonNumericTestRowFeatures)?;

        let mut nearest = BoundedNeighbourCollection::new(self.k)?;
        let mut inserted = 0usize;

        for index in 0..training_data.num_rows() {
            let row = training_data.row(index)?;
            let bound = nearest.max_distance();
            let distance = euclidean(&*query_values, row.features, bound);
            if distance < bound {
                nearest.insert(row.target.clone(), distance);
                inserted += 1;
            }
        }

        trace!(
            "scanned {} rows: {inserted} inserted, {} pruned",
            training_data.num_rows(),
            training_data.num_rows() - inserted
        );
        Ok(nearest)
    }

    /// Predicts the label of `query` by majority vote among its `k` nearest
    /// training rows.
    ///
    /// Ties between equally frequent labels go to the label of the closest
    /// neighbour.
    ///
    /// # Errors
    /// Everything [`nearest_neighbours`](Self::nearest_neighbours) returns, and
    /// `Error::EmptyNeighbourCollection` if no row could be retained.
    ///
    /// # Example
    ///
    /// ```
    /// use knn::dataset::Dataset;
    /// use knn::ml::classic::KNNClassifier;
    /// use ndarray::array;
    ///
    /// let data = Dataset::from_array(
    ///     array![[0.0, 0.0], [10.0, 10.0], [1.0, 1.0]],
    ///     vec!["A", "B", "A"],
    /// )
    /// .unwrap();
    ///
    /// let mut knn = KNNClassifier::new(1).unwrap();
    /// knn.train(&data).unwrap();
    ///
    /// assert_eq!(knn.classify(&[0.9, 0.9]).unwrap(), "A");
    /// ```
    pub fn classify<Q>(&self, query: &Q) -> Result<D::Label>
    where
        Q: FeatureRow + ?Sized,
        D::Label: Clone + PartialEq,
    {
        self.nearest_neighbours(query)?.vote()
    }

    /// Classifies each query in order, stopping at the first error.
    pub fn classify_batch<Q>(&self, queries: &[Q]) -> Result<Vec<D::Label>>
    where
        Q: FeatureRow,
        D::Label: Clone + PartialEq,
    {
        debug!("classifying batch of {} rows", queries.len());
        queries.iter().map(|query| self.classify(query)).collect()
    }

    /// Classifies the queries concurrently, one independent scan per query.
    ///
    /// Returns the same labels as [`classify_batch`](Self::classify_batch).
    #[cfg(feature = "parallel")]
    pub fn par_classify_batch<Q>(&self, queries: &[Q]) -> Result<Vec<D::Label>>
    where
        Q: FeatureRow + Sync,
        D: Sync,
        D::Label: Clone + PartialEq + Send,
    {
        debug!("classifying batch of {} rows in parallel", queries.len());
        queries
            .par_iter()
            .map(|query| self.classify(query))
            .collect()
    }

    /// Returns the fraction of rows in `test_data` whose label is predicted
    /// correctly.
    ///
    /// # Errors
    /// * `Error::EmptyTestDataset` - If `test_data` has no rows
    /// * `Error::NonNumericTestRowFeatures` - If `test_data` has non-numeric features
    /// * Any error from [`classify`](Self::classify)
    pub fn accuracy<T>(&self, test_data: &T) -> Result<f64>
    where
        T: TrainingData<Label = D::Label> + ?Sized,
        D::Label: Clone + PartialEq,
    {
        let rows = test_data.num_rows();
        if rows == 0 {
            return Err(Error::EmptyTestDataset);
        }
        if !test_data.all_features_numeric() {
            return Err(Error::NonNumericTestRowFeatures);
        }

        let mut correct = 0usize;
        for index in 0..rows {
            let row = test_data.row(index)?;
            if self.classify(&row)? == *row.target {
                correct += 1;
            }
        }

        debug!("accuracy {correct}/{rows}");
        Ok(correct as f64 / rows as f64)
    }
}
