use thiserror::Error;

use crate::chemistry::nucleotide::Nucleotide;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RatioError {
    #[error("invalid reference constant '{name}': {value} cannot be used as a divisor")]
    InvalidConstant { name: String, value: f64 },

    #[error("invalid molar mass for {nucleotide}: {value} must be positive and finite")]
    InvalidMass { nucleotide: Nucleotide, value: f64 },

    #[error("column '{0}' is not present in the derived records")]
    MissingColumn(String),
}

pub type RatioResult<T> = Result<T, RatioError>;
