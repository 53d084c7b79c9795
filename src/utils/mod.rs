pub use pareto_front::is_pareto_front;
pub(crate) use pareto_front::pareto_front_lexsorted;
#[cfg(feature = "plot")]
pub use plot::plot_front;
pub use vectors::{lex_cmp, unique_lexsorted, vector_max, UniqueLexsorted};

mod pareto_front;
#[cfg(feature = "plot")]
mod plot;
mod vectors;
