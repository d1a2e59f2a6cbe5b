use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Fitting needs at least two observations
    TooFewObservations(usize),
    /// History dates must be strictly increasing
    UnsortedHistory,
    NotFitted,
    EmptyAxis,
    /// Normal equations could not be factorised
    SingularSystem,
    InvalidConfig(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::TooFewObservations(n) => {
                write!(f, "history has {} observations, at least 2 are required", n)
            }
            ForecastError::UnsortedHistory => {
                write!(f, "history dates must be strictly increasing")
            }
            ForecastError::NotFitted => write!(f, "model must be fitted before prediction"),
            ForecastError::EmptyAxis => write!(f, "prediction axis is empty"),
            ForecastError::SingularSystem => {
                write!(f, "least-squares system is singular or not finite")
            }
            ForecastError::InvalidConfig(msg) => write!(f, "invalid forecast configuration: {}", msg),
        }
    }
}

impl Error for ForecastError {}
