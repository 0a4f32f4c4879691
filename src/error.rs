use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstimatorError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Scenario error: {0}")]
    ScenarioError(String),
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
