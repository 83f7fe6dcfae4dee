use itertools::Itertools;
use thiserror::Error;

pub type SeqResult<T> = Result<T, SequenceError>;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("absent elements at indices {}", .0.iter().join(", "))]
    AbsentElements(Vec<usize>),
    #[error("expected a json array, got {0}")]
    NotAnArray(&'static str),
    #[error("could not deserialize array element: {0}")]
    Deserialize(#[from] serde_json::Error),
}
