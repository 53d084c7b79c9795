use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised by the library.
pub enum HvError {
    #[error("The following error occurred: {0}")]
    Generic(String),
    #[error("The {0} #{1} has {2} coordinates, but {3} were expected")]
    DimensionMismatch(String, usize, usize, usize),
    #[error("NaN detected in the {0} #{1}")]
    NaN(String, usize),
    #[error("Infinite value detected in the {0} #{1}")]
    Infinite(String, usize),
    #[error("The coordinate #{0} of the reference point ({1}) must be larger than or equal to the maximum value of objective #{0} ({2}). The reference point must dominate all cost vectors.")]
    ReferencePointNotDominating(usize, f64, f64),
    #[error("An error occurred in the calculation of the '{0}' metric: {1}")]
    Metric(String, String),
    #[error("Cannot access the file '{0}' because: {1}")]
    Io(String, String),
    #[error("Cannot parse the JSON file '{0}' because: {1}")]
    Parse(String, String),
}
