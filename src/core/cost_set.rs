use crate::core::HvError;

/// Check the cost vectors passed to the Pareto filter or the hyper-volume functions. All vectors
/// must have the same number of objectives and must not contain NaNs, otherwise the dominance
/// relationship is not defined.
///
/// # Arguments
///
/// * `costs`: The cost vectors. Each item is one trial; each nested vector contains the
///    objective values.
///
/// returns: `Result<Option<usize>, HvError>`: the number of objectives, or `None` when `costs` is
/// empty.
pub fn check_cost_set(costs: &[Vec<f64>]) -> Result<Option<usize>, HvError> {
    let Some(first) = costs.first() else {
        return Ok(None);
    };
    let number_of_objectives = first.len();

    for (idx, cost) in costs.iter().enumerate() {
        if cost.len() != number_of_objectives {
            return Err(HvError::DimensionMismatch(
                "cost vector".to_string(),
                idx,
                cost.len(),
                number_of_objectives,
            ));
        }
        if cost.iter().any(|v| v.is_nan()) {
            return Err(HvError::NaN("cost vector".to_string(), idx));
        }
    }

    Ok(Some(number_of_objectives))
}

/// Check that the cost vectors only contain finite values. Infinite objectives are accepted by
/// the Pareto filter but make the box volumes infinite and their differences undefined.
///
/// # Arguments
///
/// * `costs`: The cost vectors.
///
/// returns: `Result<(), HvError>`
pub fn check_finite_cost_set(costs: &[Vec<f64>]) -> Result<(), HvError> {
    match costs.iter().position(|c| c.iter().any(|v| v.is_infinite())) {
        Some(idx) => Err(HvError::Infinite("cost vector".to_string(), idx)),
        None => Ok(()),
    }
}

/// Check that the reference point has one coordinate per objective and only finite values.
///
/// # Arguments
///
/// * `reference_point`: The reference point.
/// * `number_of_objectives`: The number of objectives of the cost vectors.
///
/// returns: `Result<(), HvError>`
pub fn check_reference_point_size(
    reference_point: &[f64],
    number_of_objectives: usize,
) -> Result<(), HvError> {
    if reference_point.len() != number_of_objectives {
        return Err(HvError::DimensionMismatch(
            "reference point".to_string(),
            0,
            reference_point.len(),
            number_of_objectives,
        ));
    }
    if reference_point.iter().any(|v| v.is_nan()) {
        return Err(HvError::NaN("reference point".to_string(), 0));
    }
    if reference_point.iter().any(|v| v.is_infinite()) {
        return Err(HvError::Infinite("reference point".to_string(), 0));
    }
    Ok(())
}

/// Check that the reference point weakly dominates all the cost vectors (i.e. each coordinate is
/// larger than or equal to the maximum value of the corresponding objective). A coordinate
/// smaller than the worst objective value produces negative box volumes.
///
/// # Arguments
///
/// * `costs`: The cost vectors.
/// * `reference_point`: The reference point.
///
/// returns: `Result<(), HvError>`
pub fn check_reference_point_dominance(
    costs: &[Vec<f64>],
    reference_point: &[f64],
) -> Result<(), HvError> {
    for (obj_idx, ref_coordinate) in reference_point.iter().enumerate() {
        let max_obj = costs
            .iter()
            .map(|c| c[obj_idx])
            .max_by(|a, b| a.total_cmp(b));
        if let Some(max_obj) = max_obj {
            if *ref_coordinate < max_obj {
                return Err(HvError::ReferencePointNotDominating(
                    obj_idx + 1,
                    *ref_coordinate,
                    max_obj,
                ));
            }
        }
    }
    Ok(())
}
