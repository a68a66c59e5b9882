use num_traits::Float;

/// Returns the Euclidean distance between `a` and `b`, giving up early once
/// the result is known to be at least `bound`.
///
/// The squared differences are accumulated element by element, relative to the
/// largest difference seen so far (as `hypot` does), so differences far beyond
/// `sqrt(F::max_value())` still give a finite distance. As soon as the partial
/// sum reaches `bound²` the remaining elements cannot bring the
/// distance back under `bound`, so the function returns a value `>= bound`
/// without finishing the vector. Callers only compare that value against
/// `bound`; its exact magnitude is meaningless. Pass `F::infinity()` to always
/// get the exact distance.
///
/// Only the common prefix of the two slices is compared.
///
/// # Examples
/// ```
/// use knn::ml::classic::k_nearest::distance::euclidean;
///
/// let d = euclidean(&[0.0, 0.0], &[3.0, 4.0], f64::INFINITY);
/// assert_eq!(d, 5.0);
///
/// // Too far: returns something no smaller than the bound.
/// assert!(euclidean(&[0.0, 0.0], &[3.0, 4.0], 2.0) >= 2.0);
/// ```
///
/// # Complexity
/// * Time: O(d) in the worst case, less once the bound is exceeded
/// * Space: O(1)
pub fn euclidean<F: Float>(a: &[F], b: &[F], bound: F) -> F {
    // distance = scale * sqrt(scaled), scale = largest |diff| so far, so the
    // squares never overflow for finite input.
    let mut scale = F::zero();
    let mut scaled = F::one();

    for (&x, &y) in a.iter().zip(b.iter()) {
        let diff = (x - y).abs();
        if diff.is_nan() {
            return diff;
        }
        if diff > F::zero() {
            if scale < diff {
                let ratio = scale / diff;
                scaled = F::one() + scaled * ratio * ratio;
                scale = diff;
            } else {
                let ratio = diff / scale;
                scaled = scaled + ratio * ratio;
            }
        }

        let limit = bound / scale;
        if scaled >= limit * limit {
            // Rounding must not drag the result under the bound.
            return (scale * scaled.sqrt()).max(bound);
        }
    }

    scale * scaled.sqrt()
}
