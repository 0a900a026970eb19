use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Error {
    /// Argument to a numeric builtin is unparseable or above its limit
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),
}
