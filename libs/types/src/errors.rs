//! Error taxonomy
//!
//! The matching core itself has no recoverable failure modes: invariant
//! violations are programming errors and fail fast. The errors here belong
//! to the boundary, where order requests are constructed from untrusted
//! input.

use thiserror::Error;

/// Order construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("quantity must be positive")]
    ZeroQuantity,

    #[error("trader id must not be empty")]
    EmptyTraderId,
}
