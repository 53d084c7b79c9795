/// The Pareto dominance relationship between two cost vectors. All objectives are minimised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first vector dominates the second one.
    First,
    /// The second vector dominates the first one.
    Second,
    /// The two vectors are identical in all coordinates.
    Equal,
    /// Neither vector dominates the other one.
    NonDominated,
}

/// Assess the Pareto dominance between two cost vectors $a$ and $b$. $a$ dominates $b$ if
/// $a_i \le b_i$ for all objectives $i$ and $a_i < b_i$ for at least one objective.
///
/// The vectors are assumed to have the same size; extra coordinates in the longest vector are
/// ignored.
///
/// # Arguments
///
/// * `a`: The first cost vector.
/// * `b`: The second cost vector.
///
/// returns: `Dominance`
pub fn compare(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better = false;
    let mut b_better = false;
    for (va, vb) in a.iter().zip(b) {
        if va < vb {
            a_better = true;
        } else if vb < va {
            b_better = true;
        }
        if a_better && b_better {
            return Dominance::NonDominated;
        }
    }

    match (a_better, b_better) {
        (true, false) => Dominance::First,
        (false, true) => Dominance::Second,
        _ => Dominance::Equal,
    }
}

/// Whether the cost vector `a` dominates `b`.
///
/// # Arguments
///
/// * `a`: The first cost vector.
/// * `b`: The second cost vector.
///
/// returns: `bool`
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    compare(a, b) == Dominance::First
}

/// The coordinate-wise maximum of two cost vectors. The box between this point and a reference
/// point is the intersection of the boxes spanned by `a` and `b`.
///
/// returns: `Vec<f64>`
pub fn coordinatewise_max(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(va, vb)| va.max(*vb)).collect()
}
