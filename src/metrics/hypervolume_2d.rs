use crate::core::{
    check_cost_set, check_finite_cost_set, check_reference_point_dominance,
    check_reference_point_size, HvError,
};
use crate::utils::pareto_front_lexsorted;

/// Calculate the hyper-volume for a two-objective problem by summing the areas of the
/// rectangles between the Pareto front and the chosen `reference_point`. This runs in
/// $O(N \log N)$ after the Pareto filter and gives the same value of
/// [`crate::metrics::compute_hypervolume`].
#[derive(Debug)]
pub struct HyperVolume2D {
    /// The distinct non-dominated points sorted by the first objective (ascending) and therefore
    /// by the second objective (descending).
    front: Vec<Vec<f64>>,
    /// The reference point.
    reference_point: Vec<f64>,
}

impl HyperVolume2D {
    /// Prepare the hyper-volume calculation for a two-objective problem. This excludes the
    /// dominated and duplicated points.
    ///
    /// **IMPLEMENTATION NOTES**:
    /// 1) The reference point must dominate all the cost vectors.
    /// 2) Both objectives are minimised.
    ///
    /// # Arguments
    ///
    /// * `costs`: The cost vectors. Each nested vector must contain 2 values.
    /// * `reference_point`: The non-dominated reference or anti-optimal point to use in the
    ///    calculation. If you are not sure about the point to use, you could pick the worst value of
    ///    each objective using [`crate::metrics::HyperVolume::estimate_reference_point`].
    ///
    /// returns: `Result<HyperVolume2D, HvError>`
    pub fn new(costs: &[Vec<f64>], reference_point: &[f64]) -> Result<Self, HvError> {
        let metric_name = "2D Hyper-volume".to_string();
        if reference_point.len() != 2 {
            return Err(HvError::Metric(
                metric_name,
                "This can only be used on a 2-objective problem.".to_string(),
            ));
        }
        if let Some(number_of_objectives) = check_cost_set(costs)? {
            check_finite_cost_set(costs)?;
            check_reference_point_size(reference_point, number_of_objectives)?;
        }
        check_reference_point_dominance(costs, reference_point)?;

        Ok(Self {
            front: pareto_front_lexsorted(costs),
            reference_point: reference_point.to_vec(),
        })
    }

    /// Calculate the hyper-volume.
    ///
    /// return: `f64`
    pub fn compute(&self) -> f64 {
        // each point covers the vertical strip up to the next point on the x axis (or the
        // reference point for the last one)
        let next_x = self
            .front
            .iter()
            .skip(1)
            .map(|p| p[0])
            .chain([self.reference_point[0]]);

        self.front
            .iter()
            .zip(next_x)
            .map(|(p, x_end)| (x_end - p[0]) * (self.reference_point[1] - p[1]))
            .sum()
    }
}
