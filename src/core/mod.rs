pub use cost_set::{
    check_cost_set, check_finite_cost_set, check_reference_point_dominance,
    check_reference_point_size,
};
pub use dominance::{compare, coordinatewise_max, dominates, Dominance};
pub use error::HvError;

mod cost_set;
mod dominance;
mod error;
#[cfg(test)]
pub(crate) mod test_utils;
