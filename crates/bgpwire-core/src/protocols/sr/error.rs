use thiserror::Error;

use crate::wire::WireError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocalBlockError {
    #[error(transparent)]
    Wire(#[from] WireError),
}
