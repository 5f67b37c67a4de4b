use thiserror::Error;

use crate::wire::WireError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsdError {
    #[error("MSD list length {length} is not a multiple of 2")]
    OddLength { length: usize },
    #[error(transparent)]
    Wire(#[from] WireError),
}
