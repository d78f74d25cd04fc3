use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word data contains no sets")]
    EmptyData,
    #[error("Set {0} contains no words")]
    EmptySet(usize),
    #[error("Word {word} of set {set} is empty")]
    EmptyWord { set: usize, word: usize },
    #[error("Set index {index} is out of range, only {len} sets loaded")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Word data is not a valid sets document")]
    InvalidData,
}

pub type Result<T> = core::result::Result<T, GameError>;
