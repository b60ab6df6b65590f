//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types and results for the seqviews library.

use std::ops::{Bound, Range, RangeBounds};

use thiserror::Error;

/// A specialized Result type for sequence view operations.
pub type SeqResult<T> = Result<T, SeqError>;

/// Errors that can occur during sequence view operations.
///
/// Every error is raised by the call that violates the contract and leaves the
/// view and its backing sequence unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The index is not a valid position in the sequence, or a sub-range ends past it.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the sequence at the time of the call.
        len: usize,
    },
    /// An argument was rejected before any work was done.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The sequence does not permit this operation.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// A cursor was moved past one of its ends.
    #[error("no such element")]
    NoSuchElement,
    /// A cursor operation was called in a position where it has no element to act on.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

impl SeqError {
    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        SeqError::IndexOutOfBounds { index, len }
    }
}

/// Checks that `index` addresses an existing element of a sequence of length `len`.
pub(crate) fn check_index(index: usize, len: usize) -> SeqResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(SeqError::out_of_bounds(index, len))
    }
}

/// Checks that `index` is a valid cursor or insertion position (`0..=len`).
pub(crate) fn check_position(index: usize, len: usize) -> SeqResult<()> {
    if index <= len {
        Ok(())
    } else {
        Err(SeqError::out_of_bounds(index, len))
    }
}

/// Converts any `RangeBounds` into a concrete `Range` within `0..len`.
pub(crate) fn resolve_range<R>(range_bounds: &R, len: usize) -> SeqResult<Range<usize>>
where
    R: RangeBounds<usize>,
{
    let start = match range_bounds.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n
            .checked_add(1)
            .ok_or_else(|| SeqError::InvalidArgument(format!("range start {n} overflows")))?,
        Bound::Unbounded => 0,
    };
    let end = match range_bounds.end_bound() {
        Bound::Included(&n) => n
            .checked_add(1)
            .ok_or_else(|| SeqError::InvalidArgument(format!("range end {n} overflows")))?,
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    };

    if end > len {
        return Err(SeqError::out_of_bounds(end, len));
    }
    if start > end {
        return Err(SeqError::InvalidArgument(format!(
            "range start {start} is greater than range end {end}"
        )));
    }
    Ok(start..end)
}
