use thiserror::Error;

use crate::MIN_SIDE;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("rows and cols must be at least {}, got {rows}x{cols}", MIN_SIDE)]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("no initial state")]
    NoInitialState,
    #[error("unexpected character {0:?} in pattern")]
    UnexpectedChar(char),
    #[error("failed to write frame")]
    Io(#[from] std::io::Error),
}
