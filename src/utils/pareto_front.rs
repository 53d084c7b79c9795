use crate::core::{check_cost_set, HvError};
use crate::utils::vectors::{unique_lexsorted, UniqueLexsorted};

/// Identify the Pareto-optimal (non-dominated) cost vectors. All objectives are minimised.
///
/// When `assume_unique_lexsorted` is `false`, the duplicated vectors are first merged and the
/// remaining ones sorted in ascending lexicographic order; duplicated vectors then inherit the
/// front membership of their unique representative, so exact copies of a Pareto-optimal vector
/// are all marked as optimal.
///
/// # Arguments
///
/// * `costs`: The cost vectors. Each item is one trial; each nested vector contains the
///    objective values.
/// * `assume_unique_lexsorted`: Set this to `true` only when `costs` does not contain duplicated
///    vectors and is already sorted in ascending lexicographic order. This skips the sorting
///    step; the result is wrong if the assumption does not hold.
///
/// returns: `Result<Vec<bool>, HvError>`: a mask with the same size of `costs`, `true` where the
/// vector is on the Pareto front. This returns an error if the vectors have different sizes or
/// contain NaNs.
pub fn is_pareto_front(
    costs: &[Vec<f64>],
    assume_unique_lexsorted: bool,
) -> Result<Vec<bool>, HvError> {
    check_cost_set(costs)?;

    if assume_unique_lexsorted {
        return Ok(is_pareto_front_unique_lexsorted(costs));
    }

    let UniqueLexsorted { unique, inverse } = unique_lexsorted(costs);
    let on_front = is_pareto_front_unique_lexsorted(&unique);
    Ok(inverse.iter().map(|rank| on_front[*rank]).collect())
}

/// Return the distinct Pareto-optimal vectors in ascending lexicographic order. The vectors are
/// assumed to be valid (same size and no NaNs).
///
/// # Arguments
///
/// * `costs`: The cost vectors.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn pareto_front_lexsorted(costs: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let unique = unique_lexsorted(costs).unique;
    let on_front = is_pareto_front_unique_lexsorted(&unique);
    unique
        .into_iter()
        .zip(on_front)
        .filter_map(|(cost, is_optimal)| is_optimal.then_some(cost))
        .collect()
}

/// Pareto filter on distinct vectors sorted in ascending lexicographic order.
///
/// The first remaining vector is lexicographically minimal and therefore cannot be dominated by
/// any other remaining vector: it is marked as optimal. The remaining vectors that are not better
/// than it in at least one objective are dominated (the vectors are all distinct) and are
/// discarded. This is repeated until no vector is left, with complexity $O(M * N^2)$ in the
/// worst case, where `M` is the number of objectives and `N` the number of vectors.
///
/// # Arguments
///
/// * `unique_lexsorted_costs`: The distinct cost vectors in ascending lexicographic order.
///
/// returns: `Vec<bool>`
pub(crate) fn is_pareto_front_unique_lexsorted(unique_lexsorted_costs: &[Vec<f64>]) -> Vec<bool> {
    let mut on_front = vec![false; unique_lexsorted_costs.len()];
    let mut remaining: Vec<usize> = (0..unique_lexsorted_costs.len()).collect();

    while !remaining.is_empty() {
        let top = remaining[0];
        on_front[top] = true;

        let top_cost = &unique_lexsorted_costs[top];
        remaining = remaining[1..]
            .iter()
            .copied()
            .filter(|idx| {
                unique_lexsorted_costs[*idx]
                    .iter()
                    .zip(top_cost)
                    .any(|(value, top_value)| value < top_value)
            })
            .collect();
    }

    on_front
}
