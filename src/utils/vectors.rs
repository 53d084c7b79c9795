use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::core::HvError;

/// Compare two vectors lexicographically, with the first coordinate being the most significant.
/// `-0.0` and `0.0` are treated as equal.
///
/// # Arguments
///
/// * `a`: The first vector.
/// * `b`: The second vector.
///
/// returns: `Ordering`
pub fn lex_cmp(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .map(|v| OrderedFloat(*v))
        .cmp(b.iter().map(|v| OrderedFloat(*v)))
}

/// The unique vectors sorted in ascending lexicographic order and the inverse map from the
/// original positions.
#[derive(Debug, PartialEq)]
pub struct UniqueLexsorted {
    /// The distinct vectors in ascending lexicographic order.
    pub unique: Vec<Vec<f64>>,
    /// For each vector in the original array, the index of the same vector in
    /// [`UniqueLexsorted::unique`]. Duplicated vectors share the same index.
    pub inverse: Vec<usize>,
}

/// Remove the duplicated vectors and sort the remaining ones in ascending lexicographic order.
/// This is equivalent to the numpy call `np.unique(data, axis=0, return_inverse=True)`.
///
/// # Arguments
///
/// * `data`: The vectors.
///
/// returns: `UniqueLexsorted`
pub fn unique_lexsorted(data: &[Vec<f64>]) -> UniqueLexsorted {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    indices.sort_by(|a, b| lex_cmp(&data[*a], &data[*b]));

    let mut unique: Vec<Vec<f64>> = Vec::new();
    let mut inverse = vec![0; data.len()];
    for idx in indices {
        let is_new = match unique.last() {
            None => true,
            Some(last) => lex_cmp(last, &data[idx]) != Ordering::Equal,
        };
        if is_new {
            unique.push(data[idx].clone());
        }
        inverse[idx] = unique.len() - 1;
    }

    UniqueLexsorted { unique, inverse }
}

/// Calculate the vector maximum value.
///
/// # Arguments
///
/// * `v`: The vector.
///
/// returns: `Result<f64, HvError>`
pub fn vector_max(v: &[f64]) -> Result<f64, HvError> {
    v.iter()
        .copied()
        .max_by(|a, b| a.total_cmp(b))
        .ok_or(HvError::Generic(
            "Cannot calculate vector max value".to_string(),
        ))
}
