pub mod k_nearest;

// Re-export public types and functions
pub use k_nearest::distance::euclidean;
pub use k_nearest::neighbours::{BoundedNeighbourCollection, Neighbour};
pub use k_nearest::KNNClassifier;
