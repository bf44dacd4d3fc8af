// Copyright 2025 the Affinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::TransformId;

/// Error returned by fallible [`TransformStack`](crate::TransformStack) edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackError {
    /// An index was not less than the number of entries.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of entries at the time.
        len: usize,
    },
    /// No entry carries this id.
    UnknownId(TransformId),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for a stack of {len} transforms")
            }
            Self::UnknownId(id) => write!(f, "no transform with id {id}"),
        }
    }
}

impl core::error::Error for StackError {}
