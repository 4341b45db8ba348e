use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("curve '{name}' has {basis} depths but {samples} samples")]
    LengthMismatch {
        name: String,
        basis: usize,
        samples: usize
    },

    #[error("depth basis of curve '{0}' is not strictly increasing")]
    BasisNotIncreasing(String),

    #[error("resample step {0} is not a finite number")]
    InvalidStep(f64),

    #[error("depth interval [{start}, {stop}] is empty or not finite")]
    InvalidInterval {
        start: f64,
        stop: f64
    }
}
