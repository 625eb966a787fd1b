//! Error taxonomy for the solver.
//!
//! Only structurally invalid inputs are reported through [`Error`]: self-loop
//! edges, unknown node ids, and spanning-tree requests on a disconnected
//! graph. Construction failures (no feasible tour) are absent-result values
//! (`Option::None`), and a tour referencing a missing edge is signalled by an
//! infinite weight, not an error. Nothing in this crate aborts the process.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
