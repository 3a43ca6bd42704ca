use crate::models::{DimensionVector, DIMENSION_COUNT};

/// Largest possible distance between two vectors in the unit hypercube
///
/// Equal to `sqrt(DIMENSION_COUNT)`.
#[inline]
pub fn max_distance() -> f64 {
    (DIMENSION_COUNT as f64).sqrt()
}

/// Calculate the Euclidean distance between two dimension vectors
#[inline]
pub fn euclidean_distance(a: &DimensionVector, b: &DimensionVector) -> f64 {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Euclidean distance scaled into `[0, 1]` by [`max_distance`]
#[inline]
pub fn normalized_distance(a: &DimensionVector, b: &DimensionVector) -> f64 {
    let distance = euclidean_distance(a, b) / max_distance();
    if distance.is_finite() {
        distance.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Similarity in `[0, 1]`: 1 for identical vectors, 0 for opposite corners
#[inline]
pub fn similarity(a: &DimensionVector, b: &DimensionVector) -> f64 {
    1.0 - normalized_distance(a, b)
}
