// This file is part of simple-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `SimpleVector`.
//!
//! Only checked element access can fail. Contract violations (popping an
//! empty vector, inserting or erasing at an invalid position) panic instead.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`SimpleVector`](crate::SimpleVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access used an index outside the live range `[0, len)`.
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The vector length at the time of the access.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}
