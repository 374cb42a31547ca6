use thiserror::Error;

pub mod mann_whitney;
pub mod multinomial;
pub mod percentile;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("distribution has no categories")]
    EmptyDistribution,
    #[error("probability vector contains a negative or non-finite weight at {0}")]
    InvalidWeight(usize),
    #[error("sample is empty")]
    EmptySample,
}
