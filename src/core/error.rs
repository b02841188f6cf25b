use thiserror::Error;

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
