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

//! # Seqviews
//!
//! A Rust library of lazy views that present an ordered sequence without copying the data behind
//! it. Each view is constant-time to build and reads through to what it wraps on every access,
//! while behaving exactly like a plain vector of the same logical contents: indexing, searching,
//! equality, hashing and formatting all agree with `Vec<T>`.
//!
//! ## Key Features
//!
//! - **Mapped**: applies a transform to every element of a backing sequence, on demand
//! - **Prefixed**: puts one element in front of a backing sequence without shifting it
//! - **Repeating**: one value repeated `n` times, stored once
//! - **Singleton**: a mutable one-element sequence
//! - **Composable**: every view is itself a `Sequence` and can back another view
//! - **Bidirectional Cursors**: walk forwards and backwards, replacing elements where allowed
//! - **Splittable Traversal**: halve the remaining work for parallel consumers, with exact sizes
//! - **Optional Features**: `serde` (default) for round-tripping views and `rayon` for parallel iteration
//!
//! ## Usage Examples
//!
//! ### Mapped View
//!
//! ```rust
//! use seqviews::{FnTransform, Mapped, Sequence};
//!
//! let celsius = vec![0.0, 100.0, 37.0];
//! let fahrenheit = Mapped::new(FnTransform::new(|c: f64| c * 9.0 / 5.0 + 32.0), &celsius);
//!
//! assert_eq!(fahrenheit.get(1).unwrap(), 212.0);
//! assert_eq!(fahrenheit.len(), 3);
//! ```
//!
//! ### Prefixed View
//!
//! ```rust
//! use seqviews::{Prefixed, Sequence, SequenceMut};
//!
//! let mut path = Prefixed::new("/", vec!["usr", "lib"]);
//! path.push("rust").unwrap();
//!
//! assert_eq!(path, vec!["/", "usr", "lib", "rust"]);
//! assert!(path.remove(0).is_err());
//! ```
//!
//! ### Repeating and Singleton Views
//!
//! ```rust
//! use seqviews::{Repeating, Sequence, SequenceMut, Singleton};
//!
//! let zeros = Repeating::new(0u8, 1_000_000).unwrap();
//! assert_eq!(zeros.last_index_of(&0), Some(999_999));
//!
//! let mut slot = Singleton::new(1);
//! slot.set(0, 2).unwrap();
//! assert_eq!(slot, vec![2]);
//! ```
//!
//! ## Custom Sequences
//!
//! Any type can back a view by implementing [`Sequence`], and [`SequenceMut`] for whatever
//! mutations it supports. The index-based [`IndexCursor`] and [`IndexSplitter`] cover the
//! traversal types:
//!
//! ```rust
//! use seqviews::{IndexCursor, IndexSplitter, SeqError, SeqResult, Sequence, SequenceMut};
//!
//! struct Squares(usize);
//!
//! impl Sequence for Squares {
//!     type Item = usize;
//!     type Cursor<'a> = IndexCursor<'a, Self>;
//!     type Splitter<'a> = IndexSplitter<'a, Self>;
//!
//!     fn len(&self) -> usize {
//!         self.0
//!     }
//!
//!     fn get(&self, index: usize) -> SeqResult<usize> {
//!         if index < self.0 {
//!             Ok(index * index)
//!         } else {
//!             Err(SeqError::IndexOutOfBounds { index, len: self.0 })
//!         }
//!     }
//!
//!     fn cursor(&self) -> Self::Cursor<'_> {
//!         IndexCursor::front(self)
//!     }
//!
//!     fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
//!         IndexCursor::new(self, index)
//!     }
//!
//!     fn splitter(&self) -> Self::Splitter<'_> {
//!         IndexSplitter::new(self)
//!     }
//! }
//!
//! impl SequenceMut for Squares {}
//!
//! assert_eq!(Squares(4).to_vec(), vec![0, 1, 4, 9]);
//! ```
//!
//! ## Error Handling
//!
//! Operations return `SeqResult<T>` which can contain the following errors:
//!
//! - `SeqError::IndexOutOfBounds`: The index or the end of a range is past the sequence
//! - `SeqError::InvalidArgument`: A repetition count is not positive, or a range is reversed
//! - `SeqError::UnsupportedOperation`: The view does not allow this mutation
//! - `SeqError::NoSuchElement`: A cursor was moved past one of its ends
//! - `SeqError::InvalidState`: A cursor was asked to replace an element it has not returned
//!
//! A call that fails leaves the view and its backing sequence unchanged.
//!
//! ## Thread Safety
//!
//! Views hold no locks. They are `Send` and `Sync` whenever their contents are, so immutable
//! views can be read from many threads at once, and mutation needs the usual exclusive borrow.
//!
//! ## License
//!
//! Licensed under the Apache License, Version 2.0.

#![warn(
    clippy::cargo,
    missing_docs,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

mod cursor;
mod mapped;
#[cfg(feature = "rayon")]
mod parallel;
mod prefixed;
mod repeating;
mod result;
mod sequence;
mod singleton;
mod splitter;
mod subseq;
mod transform;

pub use self::cursor::{IndexCursor, IndexCursorMut, Iter, ListCursor};
pub use self::mapped::{Mapped, MappedCursor, MappedSplitter};
#[cfg(feature = "rayon")]
pub use self::parallel::ParSplitter;
pub use self::prefixed::Prefixed;
pub use self::repeating::{Repeating, RepeatingCursor, RepeatingSlice, RepeatingSplitter};
pub use self::result::{SeqError, SeqResult};
pub use self::sequence::{Sequence, SequenceMut};
pub use self::singleton::{Singleton, SingletonCursor, SingletonCursorMut, SingletonSplitter};
pub use self::splitter::{Characteristics, IndexSplitter, SplitIter, Splitter};
pub use self::subseq::SubSequence;
pub use self::transform::{Convert, DisplayString, FnTransform, Transform};
