//! Pareto front extraction and exact hyper-volume indicator for multi-objective optimisation.
//!
//! All objectives are minimised: to maximise an objective, negate its values and the
//! corresponding reference point coordinate before calling any function.
//!
//! - [`is_pareto_front`] returns a mask with the non-dominated cost vectors.
//! - [`compute_hypervolume`] returns the volume of the region dominated by the cost vectors and
//!   bounded by a reference point. Use [`metrics::HyperVolume`] to configure the calculation,
//!   for example to run it in threads.
//!
//! ```rust
//! use pareto_hv::{compute_hypervolume, is_pareto_front};
//!
//! let costs = vec![vec![1.0, 1.0], vec![2.0, 0.0], vec![0.0, 2.0], vec![2.0, 2.0]];
//! assert_eq!(is_pareto_front(&costs, false).unwrap(), vec![true, true, true, false]);
//! assert_eq!(compute_hypervolume(&costs, &[3.0, 3.0]).unwrap(), 6.0);
//! ```
pub use crate::core::HvError;
pub use crate::metrics::compute_hypervolume;
pub use crate::utils::is_pareto_front;

pub mod core;
pub mod metrics;
pub mod utils;
