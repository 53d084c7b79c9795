use float_cmp::{approx_eq, F64Margin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::dominates;

/// Compare two arrays of f64
pub(crate) fn assert_approx_array_eq(calculated_values: &[f64], expected_values: &[f64]) {
    let margins = F64Margin {
        epsilon: 1e-9,
        ulps: 4,
    };
    assert_eq!(calculated_values.len(), expected_values.len());
    for (i, (calculated, expected)) in calculated_values.iter().zip(expected_values).enumerate() {
        if !approx_eq!(f64, *calculated, *expected, margins) {
            panic!(
                r#"assertion failed on item #{i:?}
                    actual: `{calculated:?}`,
                    expected: `{expected:?}`"#,
            )
        }
    }
}

/// Pareto membership computed by comparing each vector against all the others.
///
/// # Arguments
///
/// * `costs`: The cost vectors.
///
/// returns: `Vec<bool>`
pub(crate) fn brute_force_pareto_mask(costs: &[Vec<f64>]) -> Vec<bool> {
    costs
        .iter()
        .map(|c| !costs.iter().any(|other| dominates(other, c)))
        .collect()
}

/// Hyper-volume of cost vectors with integer coordinates, calculated by counting the unit cells
/// between the origin and the reference point that are dominated by at least one vector. All
/// coordinates must be non-negative integers.
///
/// # Arguments
///
/// * `costs`: The cost vectors.
/// * `reference_point`: The reference point.
///
/// returns: `f64`
pub(crate) fn grid_hypervolume(costs: &[Vec<f64>], reference_point: &[f64]) -> f64 {
    let sizes: Vec<usize> = reference_point.iter().map(|r| *r as usize).collect();
    let total_cells: usize = sizes.iter().product();

    let mut cell = vec![0.0; sizes.len()];
    let mut count = 0;
    for flat in 0..total_cells {
        let mut rem = flat;
        for (axis, size) in sizes.iter().enumerate() {
            cell[axis] = (rem % size) as f64;
            rem /= size;
        }
        if costs
            .iter()
            .any(|c| c.iter().zip(&cell).all(|(ci, xi)| ci <= xi))
        {
            count += 1;
        }
    }
    count as f64
}

/// Generate cost vectors with random integer coordinates in `[0, max_value)`. A small
/// `max_value` produces many duplicated and dominated vectors.
///
/// # Arguments
///
/// * `seed`: The seed for the random number generator.
/// * `number_of_vectors`: The number of vectors to generate.
/// * `number_of_objectives`: The size of each vector.
/// * `max_value`: The exclusive upper bound of each coordinate.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_integer_costs(
    seed: u64,
    number_of_vectors: usize,
    number_of_objectives: usize,
    max_value: u32,
) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..number_of_vectors)
        .map(|_| {
            (0..number_of_objectives)
                .map(|_| rng.gen_range(0..max_value) as f64)
                .collect()
        })
        .collect()
}

/// Generate cost vectors with random real coordinates in `[0, 1)`.
///
/// # Arguments
///
/// * `seed`: The seed for the random number generator.
/// * `number_of_vectors`: The number of vectors to generate.
/// * `number_of_objectives`: The size of each vector.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn random_costs(
    seed: u64,
    number_of_vectors: usize,
    number_of_objectives: usize,
) -> Vec<Vec<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..number_of_vectors)
        .map(|_| (0..number_of_objectives).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

/// Shuffle the cost vectors with a seeded generator.
///
/// returns: `Vec<Vec<f64>>`
pub(crate) fn shuffled(costs: &[Vec<f64>], seed: u64) -> Vec<Vec<f64>> {
    use rand::seq::SliceRandom;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut costs = costs.to_vec();
    costs.shuffle(&mut rng);
    costs
}
