use num_traits::Float;

use crate::error::{Error, Result};

/// A retained neighbour: a training label and its distance to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbour<L, F = f64> {
    pub label: L,
    pub distance: F,
}

/// Keeps the `k` closest neighbours seen so far during a scan.
///
/// Entries are held in ascending distance order. Equal distances keep their
/// insertion order, so a new entry is placed after every retained entry of the
/// same distance.
///
/// Eviction policy once the collection is full:
/// - an entry is accepted only if its distance is strictly less than
///   [`max_distance`](Self::max_distance); an entry tied with the current
///   maximum is rejected, so the first-seen entries win at the boundary;
/// - the accepted entry evicts the last entry in order, i.e. the
///   most recently inserted of the entries sharing the maximum distance.
///
/// # Examples
/// ```
/// use knn::ml::classic::k_nearest::neighbours::BoundedNeighbourCollection;
///
/// let mut nearest = BoundedNeighbourCollection::new(2).unwrap();
/// assert_eq!(nearest.max_distance(), f64::INFINITY);
///
/// nearest.insert("A", 3.0);
/// nearest.insert("B", 1.0);
/// assert_eq!(nearest.max_distance(), 3.0);
///
/// nearest.insert("B", 2.0); // evicts the "A" at 3.0
/// assert_eq!(nearest.vote().unwrap(), "B");
/// ```
#[derive(Debug, Clone)]
pub struct BoundedNeighbourCollection<L, F = f64> {
    capacity: usize,
    entries: Vec<Neighbour<L, F>>,
}

impl<L, F: Float> BoundedNeighbourCollection<L, F> {
    /// Creates an empty collection holding at most `capacity` neighbours.
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - If `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity { capacity });
        }

        Ok(Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// The pruning bound: the largest retained distance when full, infinity
    /// otherwise.
    pub fn max_distance(&self) -> F {
        match self.entries.last() {
            Some(worst) if self.is_full() => worst.distance,
            _ => F::infinity(),
        }
    }

    /// Offers a neighbour to the collection and returns whether it was kept.
    ///
    /// While the collection is not full every entry is kept. Once full, only an
    /// entry strictly closer than [`max_distance`](Self::max_distance) is kept,
    /// and the current worst entry is evicted to make room. A NaN distance is
    /// never kept.
    pub fn insert(&mut self, label: L, distance: F) -> bool {
        if distance.is_nan() || (self.is_full() && distance >= self.max_distance()) {
            return false;
        }

        let position = self.entries.partition_point(|e| e.distance <= distance);
        self.entries.insert(position, Neighbour { label, distance });
        if self.entries.len() > self.capacity {
            self.entries.pop();
        }
        true
    }

    /// Iterates over the retained neighbours, closest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Neighbour<L, F>> {
        self.entries.iter()
    }

    /// Consumes the collection, returning the neighbours closest first.
    pub fn into_sorted_vec(self) -> Vec<Neighbour<L, F>> {
        self.entries
    }
}

impl<L: Clone + PartialEq, F: Float> BoundedNeighbourCollection<L, F> {
    /// Returns the most frequent label among the retained neighbours.
    ///
    /// Among equally frequent labels the one owning the closest neighbour wins,
    /// which is the first of them met when walking the entries in order.
    ///
    /// # Errors
    /// * `Error::EmptyNeighbourCollection` - If no neighbour was retained
    pub fn vote(&self) -> Result<L> {
        // (label, count) in order of first appearance; k is small.
        let mut tally: Vec<(&L, usize)> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            match tally.iter_mut().find(|(label, _)| *label == &entry.label) {
                Some((_, count)) => *count += 1,
                None => tally.push((&entry.label, 1)),
            }
        }

        let mut winner: Option<(&L, usize)> = None;
        for (label, count) in tally {
            match winner {
                Some((_, best)) if count <= best => {}
                _ => winner = Some((label, count)),
            }
        }

        winner
            .map(|(label, _)| label.clone())
            .ok_or(Error::EmptyNeighbourCollection)
    }
}

impl<'a, L, F> IntoIterator for &'a BoundedNeighbourCollection<L, F> {
    type Item = &'a Neighbour<L, F>;
    type IntoIter = std::slice::Iter<'a, Neighbour<L, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
