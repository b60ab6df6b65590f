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

//! A read-only view that applies a transform to every element of a backing sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeBounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cursor::{Iter, ListCursor};
use crate::result::SeqResult;
use crate::sequence::{Sequence, SequenceMut, fmt_debug, fmt_display, hash_sequence, sequences_eq};
use crate::splitter::{Characteristics, Splitter};
use crate::subseq::SubSequence;
use crate::transform::Transform;

/// A read-only view of a backing sequence after applying a [`Transform`] to each element.
///
/// Nothing is computed up front and nothing is cached: every `get`, every cursor step and every
/// splitter step applies the transform to the backing element it reads. Length, cursors and
/// splitters come from the backing sequence, so a parallel consumer sees the same splitting
/// behaviour and characteristics as it would on the backing sequence itself.
///
/// Every mutation is rejected with [`SeqError::UnsupportedOperation`](crate::SeqError), whether
/// or not the backing sequence is mutable.
///
/// # Examples
///
/// ```rust
/// use seqviews::{DisplayString, Mapped, Sequence};
///
/// let numbers = vec![0, 1, 2, 3, 4];
/// let strings = Mapped::new(DisplayString, &numbers);
///
/// assert_eq!(strings.get(3).unwrap(), "3");
/// assert_eq!(strings.index_of(&"4".to_string()), Some(4));
/// assert_eq!(strings, vec!["0", "1", "2", "3", "4"].iter().map(|s| s.to_string()).collect::<Vec<_>>());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mapped<B, F> {
    transform: F,
    backing: B,
}

impl<B, F> Mapped<B, F> {
    /// Creates a view of `backing` mapped through `transform`.
    pub fn new(transform: F, backing: B) -> Self {
        Self { transform, backing }
    }

    /// Returns the transform.
    pub fn transform(&self) -> &F {
        &self.transform
    }

    /// Returns the backing sequence.
    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Splits the view into its transform and backing sequence.
    pub fn into_parts(self) -> (F, B) {
        (self.transform, self.backing)
    }
}

impl<B, F> Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
{
    /// Returns a live mapped view of a range of the backing sequence, sharing the transform.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqviews::{FnTransform, Mapped, Sequence};
    ///
    /// let numbers = vec![1, 2, 3, 4, 5];
    /// let squares = Mapped::new(FnTransform::new(|x: i32| x * x), &numbers);
    /// let middle = squares.sub_sequence(1..4).unwrap();
    ///
    /// assert_eq!(middle, vec![4, 9, 16]);
    /// ```
    pub fn sub_sequence<R>(&self, range: R) -> SeqResult<Mapped<SubSequence<&B>, &F>>
    where
        R: RangeBounds<usize>,
    {
        let window = SubSequence::new(&self.backing, range)?;
        Ok(Mapped::new(&self.transform, window))
    }
}

impl<B, F> Sequence for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
{
    type Item = F::Output;
    type Cursor<'a>
        = MappedCursor<'a, B::Cursor<'a>, F>
    where
        Self: 'a;
    type Splitter<'a>
        = MappedSplitter<'a, B::Splitter<'a>, F>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.backing.len()
    }

    fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    fn get(&self, index: usize) -> SeqResult<Self::Item> {
        self.backing
            .get(index)
            .map(|original| self.transform.apply(original))
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        MappedCursor {
            inner: self.backing.cursor(),
            transform: &self.transform,
        }
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        Ok(MappedCursor {
            inner: self.backing.cursor_at(index)?,
            transform: &self.transform,
        })
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        MappedSplitter {
            inner: self.backing.splitter(),
            transform: &self.transform,
        }
    }
}

// Read-only: every mutation is rejected.
impl<B, F> SequenceMut for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
{
}

impl<B, F, R> PartialEq<R> for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
    F::Output: PartialEq,
    R: Sequence<Item = F::Output>,
{
    fn eq(&self, other: &R) -> bool {
        sequences_eq(self, other)
    }
}

impl<B, F> Eq for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
    F::Output: Eq,
{
}

impl<T, B, F> PartialEq<Mapped<B, F>> for Vec<T>
where
    T: Clone + PartialEq,
    B: Sequence,
    F: Transform<B::Item, Output = T>,
{
    fn eq(&self, other: &Mapped<B, F>) -> bool {
        sequences_eq(self, other)
    }
}

impl<B, F> Hash for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
    F::Output: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<B, F> fmt::Debug for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
    F::Output: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self, f)
    }
}

impl<B, F> fmt::Display for Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
    F::Output: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self, f)
    }
}

impl<'a, B, F> IntoIterator for &'a Mapped<B, F>
where
    B: Sequence,
    F: Transform<B::Item>,
{
    type Item = F::Output;
    type IntoIter = Iter<MappedCursor<'a, B::Cursor<'a>, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A cursor that maps the elements yielded by a backing cursor.
pub struct MappedCursor<'a, C, F> {
    inner: C,
    transform: &'a F,
}

impl<C, F> ListCursor for MappedCursor<'_, C, F>
where
    C: ListCursor,
    F: Transform<C::Item>,
{
    type Item = F::Output;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    fn next_index(&self) -> usize {
        self.inner.next_index()
    }

    fn previous_index(&self) -> Option<usize> {
        self.inner.previous_index()
    }

    fn advance(&mut self) -> SeqResult<Self::Item> {
        self.inner
            .advance()
            .map(|original| self.transform.apply(original))
    }

    fn retreat(&mut self) -> SeqResult<Self::Item> {
        self.inner
            .retreat()
            .map(|original| self.transform.apply(original))
    }
}

impl<C: fmt::Debug, F> fmt::Debug for MappedCursor<'_, C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedCursor")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// A splitter that maps the elements yielded by a backing splitter.
///
/// Splitting, sizes and characteristics are exactly those of the backing splitter.
pub struct MappedSplitter<'a, S, F> {
    inner: S,
    transform: &'a F,
}

impl<S, F> Splitter for MappedSplitter<'_, S, F>
where
    S: Splitter,
    F: Transform<S::Item>,
{
    type Item = F::Output;

    fn try_advance(&mut self) -> Option<Self::Item> {
        self.inner
            .try_advance()
            .map(|original| self.transform.apply(original))
    }

    fn try_split(&mut self) -> Option<Self> {
        self.inner.try_split().map(|inner| MappedSplitter {
            inner,
            transform: self.transform,
        })
    }

    fn estimate_size(&self) -> usize {
        self.inner.estimate_size()
    }

    fn exact_size(&self) -> Option<usize> {
        self.inner.exact_size()
    }

    fn characteristics(&self) -> Characteristics {
        self.inner.characteristics()
    }

    fn for_each_remaining<G>(&mut self, mut action: G)
    where
        G: FnMut(Self::Item),
    {
        let transform = self.transform;
        self.inner
            .for_each_remaining(|original| action(transform.apply(original)));
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MappedSplitter<'_, S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedSplitter")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
