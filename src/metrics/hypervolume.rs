use chrono::{DateTime, Utc};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{
    check_cost_set, check_finite_cost_set, check_reference_point_dominance,
    check_reference_point_size, coordinatewise_max, HvError,
};
use crate::metrics::export::CostSetExport;
use crate::utils::{pareto_front_lexsorted, vector_max};

static METRIC_NAME: &str = "Hyper-volume";

/// Options to configure the hyper-volume calculation. Unset fields fall back to their default.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct HyperVolumeArg {
    /// Compute the exclusive contribution of each point of the Pareto front in threads. When the
    /// hyper-volume of several cost sets is calculated with [`HyperVolume::from_batch`], the sets
    /// are also processed in threads. This defaults to `false`.
    pub parallel: Option<bool>,
    /// Return an error when the reference point does not dominate all cost vectors. When this is
    /// `false` the caller must guarantee the dominance, otherwise the returned volume is
    /// meaningless and can be negative. This defaults to `true`.
    pub check_reference_point: Option<bool>,
}

/// Calculate the exact hyper-volume of a set of cost vectors, i.e. the volume of the union of
/// the boxes between each vector and a reference point. All objectives are minimised; maximised
/// objectives must be negated, together with the reference point coordinates.
///
/// The dominated and duplicated vectors are removed first, as they do not change the volume.
/// The remaining vectors are sorted lexicographically and the volume is calculated recursively
/// using the inclusion-exclusion principle: for each vector $v_i$, its exclusive contribution is
/// the volume of its box minus the hyper-volume of the intersections with the boxes of the
/// vectors $v_j$, with $j > i$. The intersections are the boxes of the coordinate-wise maximum
/// $max(v_i, v_j)$; these are reduced to their Pareto front before recursing.
///
/// The calculation is exact for any number of objectives, but its cost grows steeply with the
/// number of non-dominated vectors and objectives.
///
/// The hyper-volume can be calculated from the following sources:
/// - an array of cost vectors using [`HyperVolume::compute`] or [`compute_hypervolume`]
/// - several independent arrays using [`HyperVolume::from_batch`]
/// - a snapshot exported to a JSON file using [`HyperVolume::from_file`]
/// - a folder with snapshots using [`HyperVolume::from_files`]
///
/// # Example
/// ```rust
/// use pareto_hv::metrics::{HyperVolume, HyperVolumeArg};
///
/// let hv = HyperVolume::new(HyperVolumeArg {
///     parallel: Some(true),
///     check_reference_point: None,
/// });
/// let costs = vec![vec![1.0, 1.0], vec![2.0, 0.0], vec![0.0, 2.0]];
/// assert_eq!(hv.compute(&costs, &[3.0, 3.0]).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone)]
pub struct HyperVolume {
    /// Whether to calculate the contributions in threads.
    parallel: bool,
    /// Whether to check that the reference point dominates all vectors.
    check_reference_point: bool,
}

impl Default for HyperVolume {
    fn default() -> Self {
        Self::new(HyperVolumeArg::default())
    }
}

/// The hyper-volume value and other file data. This struct is used to store the metric calculated
/// from a snapshot exported to a JSON file.
#[derive(Debug)]
pub struct HyperVolumeFileData {
    /// The generation the snapshot was exported at.
    pub generation: usize,
    /// The time when the snapshot was exported.
    pub time: DateTime<Utc>,
    /// The hyper-volume value.
    pub value: f64,
}

/// The vector with hyper-volume data from multiple files, sorted by generation.
#[derive(Debug)]
pub struct AllHyperVolumeFileData(Vec<HyperVolumeFileData>);

impl AllHyperVolumeFileData {
    /// Get all hyper-volume values.
    ///
    /// returns: `Vec<f64>`
    pub fn values(&self) -> Vec<f64> {
        self.0.iter().map(|s| s.value).collect()
    }

    /// Get all generations.
    ///
    /// returns: `Vec<usize>`
    pub fn generations(&self) -> Vec<usize> {
        self.0.iter().map(|s| s.generation).collect()
    }

    /// Get all [`DateTime<Utc>`] when the snapshots were exported.
    ///
    /// returns: `Vec<DateTime<Utc>>`
    pub fn times(&self) -> Vec<DateTime<Utc>> {
        self.0.iter().map(|s| s.time).collect()
    }
}

impl HyperVolume {
    /// Initialise the hyper-volume calculator.
    ///
    /// # Arguments
    ///
    /// * `args`: The options.
    ///
    /// returns: `HyperVolume`
    pub fn new(args: HyperVolumeArg) -> Self {
        Self {
            parallel: args.parallel.unwrap_or(false),
            check_reference_point: args.check_reference_point.unwrap_or(true),
        }
    }

    /// Calculate the exact hyper-volume of the cost vectors.
    ///
    /// # Arguments
    ///
    /// * `costs`: The cost vectors. Each item is one trial; each nested vector contains the
    ///    objective values.
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation. This
    ///    must be dominated by all cost vectors. If you are not sure about the point to use, you
    ///    could pick the worst value of each objective using
    ///    [`HyperVolume::estimate_reference_point`].
    ///
    /// returns: `Result<f64, HvError>`: the volume, `0` when `costs` is empty. This returns an
    /// error if the vectors and the reference point do not have the same size, if they contain
    /// NaNs or infinite values or, when checked, if the reference point does not dominate all the vectors.
    pub fn compute(&self, costs: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HvError> {
        let Some(number_of_objectives) = check_cost_set(costs)? else {
            debug!("No cost vectors given, the hyper-volume is 0");
            return Ok(0.0);
        };
        if number_of_objectives == 0 {
            return Err(HvError::Metric(
                METRIC_NAME.to_string(),
                "The cost vectors must have at least one objective".to_string(),
            ));
        }
        check_finite_cost_set(costs)?;
        check_reference_point_size(reference_point, number_of_objectives)?;
        if self.check_reference_point {
            check_reference_point_dominance(costs, reference_point)?;
        }

        let front = pareto_front_lexsorted(costs);
        if front.len() != costs.len() {
            debug!(
                "{} cost vectors were removed because they are dominated or duplicated",
                costs.len() - front.len()
            );
        }
        debug!("Using non-dominated front {:?}", front);
        debug!("Reference point is {:?}", reference_point);

        Ok(hypervolume_lexsorted(&front, reference_point, self.parallel))
    }

    /// Calculate the hyper-volume of independent cost sets with the same reference point (for
    /// example one set per benchmark instance).
    ///
    /// # Arguments
    ///
    /// * `cost_sets`: The cost sets.
    /// * `reference_point`: The reference point. This must be dominated by all the vectors in all
    ///    sets.
    ///
    /// returns: `Result<Vec<f64>, HvError>`: the volume of each set, in the same order.
    pub fn from_batch(
        &self,
        cost_sets: &[Vec<Vec<f64>>],
        reference_point: &[f64],
    ) -> Result<Vec<f64>, HvError> {
        if self.parallel {
            cost_sets
                .par_iter()
                .map(|costs| self.compute(costs, reference_point))
                .collect()
        } else {
            cost_sets
                .iter()
                .map(|costs| self.compute(costs, reference_point))
                .collect()
        }
    }

    /// Calculate the hyper-volume of a snapshot previously exported with
    /// [`CostSetExport::save_to_json`].
    ///
    /// # Arguments
    ///
    /// * `data`: The snapshot. This can be imported using [`crate::metrics::read_json_file`].
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation.
    ///
    /// returns: `Result<HyperVolumeFileData, HvError>`: the hyper-volume value and the file
    /// information.
    pub fn from_file(
        &self,
        data: &CostSetExport,
        reference_point: &[f64],
    ) -> Result<HyperVolumeFileData, HvError> {
        let value = self.compute(&data.costs, reference_point)?;
        Ok(HyperVolumeFileData {
            generation: data.generation,
            time: data.exported_on,
            value,
        })
    }

    /// Calculate the hyper-volume of the snapshots previously exported with
    /// [`CostSetExport::save_to_json`]. This is useful to track the convergence of an
    /// optimisation run.
    ///
    /// # Arguments
    ///
    /// * `data`: The snapshots. These can be imported using [`crate::metrics::read_json_files`].
    /// * `reference_point`: The reference or anti-optimal point to use in the calculation.
    ///
    /// returns: `Result<AllHyperVolumeFileData, HvError>`: the hyper-volume values and the file
    /// information, sorted by generation.
    pub fn from_files(
        &self,
        data: &[CostSetExport],
        reference_point: &[f64],
    ) -> Result<AllHyperVolumeFileData, HvError> {
        let mut results = data
            .iter()
            .map(|d| self.from_file(d, reference_point))
            .collect::<Result<Vec<HyperVolumeFileData>, HvError>>()?;

        results.sort_by_key(|r| r.generation);
        Ok(AllHyperVolumeFileData(results))
    }

    /// Calculates a reference point by taking the maximum of each objective from the cost
    /// vectors, so that the point will be dominated by all vectors. An optional offset for each
    /// objective can be added to enforce strict dominance; without it, the vectors with the
    /// worst value of an objective contribute no volume.
    ///
    /// # Arguments
    ///
    /// * `costs`: The cost vectors.
    /// * `offset`: The offset for each objective to add to the calculated reference point. This
    ///    must have a size equal to the number of objectives.
    ///
    /// returns: `Result<Vec<f64>, HvError>` The reference point. This returns an error if there
    /// are no vectors or the size of the offset does not match the number of objectives.
    pub fn estimate_reference_point(
        costs: &[Vec<f64>],
        offset: Option<Vec<f64>>,
    ) -> Result<Vec<f64>, HvError> {
        let metric_name = "reference_point".to_string();
        let number_of_objectives = check_cost_set(costs)?.ok_or(HvError::Metric(
            metric_name.clone(),
            "There are no cost vectors in the array".to_string(),
        ))?;

        if let Some(ref offset) = offset {
            if offset.len() != number_of_objectives {
                return Err(HvError::Metric(
                    metric_name,
                    format!(
                        "The offset size ({}) must match the number of objectives ({})",
                        offset.len(),
                        number_of_objectives
                    ),
                ));
            }
        }

        let mut ref_point = (0..number_of_objectives)
            .map(|obj_idx| {
                let obj_values: Vec<f64> = costs.iter().map(|c| c[obj_idx]).collect();
                vector_max(&obj_values)
            })
            .collect::<Result<Vec<f64>, HvError>>()?;

        if let Some(offset) = offset {
            ref_point
                .iter_mut()
                .zip(offset)
                .for_each(|(coordinate, o)| *coordinate += o);
        }

        Ok(ref_point)
    }
}

/// Calculate the exact hyper-volume of the cost vectors with the default options (sequential
/// calculation and reference point check). See [`HyperVolume`] for details.
///
/// # Arguments
///
/// * `costs`: The cost vectors. Each item is one trial; each nested vector contains the
///    objective values.
/// * `reference_point`: The reference point. This must be dominated by all cost vectors.
///
/// returns: `Result<f64, HvError>`
pub fn compute_hypervolume(costs: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HvError> {
    HyperVolume::default().compute(costs, reference_point)
}

/// The volume of the box between a cost vector and the reference point.
fn inclusive_volume(cost: &[f64], reference_point: &[f64]) -> f64 {
    reference_point
        .iter()
        .zip(cost)
        .map(|(r, c)| r - c)
        .product()
}

/// Hyper-volume of distinct non-dominated vectors sorted in ascending lexicographic order.
///
/// # Arguments
///
/// * `sorted_front`: The vectors.
/// * `reference_point`: The reference point.
/// * `parallel`: Whether to calculate the exclusive contributions of this level in threads.
///
/// returns: `f64`
fn hypervolume_lexsorted(
    sorted_front: &[Vec<f64>],
    reference_point: &[f64],
    parallel: bool,
) -> f64 {
    match sorted_front {
        [] => 0.0,
        [single] => inclusive_volume(single, reference_point),
        [first, second] => {
            inclusive_volume(first, reference_point) + inclusive_volume(second, reference_point)
                - inclusive_volume(&coordinatewise_max(first, second), reference_point)
        }
        _ if parallel => (0..sorted_front.len())
            .into_par_iter()
            .map(|i| exclusive_volume(sorted_front, i, reference_point))
            .sum(),
        _ => (0..sorted_front.len())
            .map(|i| exclusive_volume(sorted_front, i, reference_point))
            .sum(),
    }
}

/// The volume dominated by the vector at `index` only and not by any vector that follows it.
fn exclusive_volume(sorted_front: &[Vec<f64>], index: usize, reference_point: &[f64]) -> f64 {
    let cost = &sorted_front[index];
    let inclusive = inclusive_volume(cost, reference_point);

    let later = &sorted_front[index + 1..];
    if later.is_empty() {
        return inclusive;
    }

    let overlaps: Vec<Vec<f64>> = later
        .iter()
        .map(|other| coordinatewise_max(cost, other))
        .collect();
    let overlap_front = pareto_front_lexsorted(&overlaps);

    inclusive - hypervolume_lexsorted(&overlap_front, reference_point, false)
}
