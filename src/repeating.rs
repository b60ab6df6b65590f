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

//! One value repeated a fixed number of times.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::ops::{Range, RangeBounds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

use crate::cursor::{IndexCursor, Iter, ListCursor};
use crate::result::{SeqError, SeqResult, check_index, check_position, resolve_range};
use crate::sequence::{Sequence, SequenceMut, fmt_debug, fmt_display, hash_sequence, sequences_eq};
use crate::splitter::{Characteristics, IndexSplitter, Splitter};

/// An immutable sequence of `count` repetitions of one value, stored once.
///
/// Every position aliases the same stored value and hands out a clone of it. The count is at
/// least 1, so the sequence is never empty.
///
/// # Examples
///
/// ```rust
/// use seqviews::{Repeating, Sequence};
///
/// let dashes = Repeating::new('-', 3).unwrap();
/// assert_eq!(dashes.len(), 3);
/// assert_eq!(dashes.to_string(), "[-, -, -]");
/// assert_eq!(dashes, vec!['-', '-', '-']);
///
/// assert!(Repeating::new('-', 0).is_err());
/// assert!(Repeating::new('-', -1).is_err());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Repeating<T> {
    value: T,
    count: usize,
}

impl<T> Repeating<T> {
    /// Creates a sequence of `count` repetitions of `value`.
    ///
    /// The count may be of any integer type. A count that is zero, negative or does not fit in a
    /// `usize` fails with [`SeqError::InvalidArgument`].
    pub fn new<N>(value: T, count: N) -> SeqResult<Self>
    where
        N: TryInto<usize> + fmt::Display + Copy,
    {
        match count.try_into() {
            Ok(repetitions) if repetitions > 0 => Ok(Self {
                value,
                count: repetitions,
            }),
            _ => {
                log::debug!("rejecting repetition count {count}");
                Err(SeqError::InvalidArgument(format!(
                    "repetitions must be positive but was: {count}"
                )))
            }
        }
    }

    /// Returns the repeated value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the number of repetitions.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Unwraps the repeated value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone> Repeating<T> {
    /// Returns the repetitions covered by `range` as a detached sequence.
    ///
    /// The result does not borrow this sequence: an empty range gives
    /// [`RepeatingSlice::Empty`], a single position gives [`RepeatingSlice::Single`] and anything
    /// longer gives a new [`Repeating`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqviews::{Repeating, RepeatingSlice};
    ///
    /// let ones = Repeating::new(1, 5).unwrap();
    /// assert!(matches!(ones.sub_sequence(2..2).unwrap(), RepeatingSlice::Empty));
    /// assert_eq!(ones.sub_sequence(0..1).unwrap(), vec![1]);
    /// assert_eq!(ones.sub_sequence(1..4).unwrap(), vec![1, 1, 1]);
    /// assert!(ones.sub_sequence(0..6).is_err());
    /// ```
    pub fn sub_sequence<R>(&self, range: R) -> SeqResult<RepeatingSlice<T>>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = resolve_range(&range, self.count)?;
        Ok(match end - start {
            0 => RepeatingSlice::Empty,
            1 => RepeatingSlice::Single(self.value.clone()),
            count => RepeatingSlice::Many(Repeating {
                value: self.value.clone(),
                count,
            }),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Repeating<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "Repeating")]
        struct Unchecked<V> {
            value: V,
            count: usize,
        }

        let unchecked = Unchecked::deserialize(deserializer)?;
        Repeating::new(unchecked.value, unchecked.count).map_err(serde::de::Error::custom)
    }
}

impl<T: Clone> Sequence for Repeating<T> {
    type Item = T;
    type Cursor<'a>
        = RepeatingCursor<'a, T>
    where
        Self: 'a;
    type Splitter<'a>
        = RepeatingSplitter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.count
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        check_index(index, self.count)?;
        Ok(self.value.clone())
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        RepeatingCursor {
            value: &self.value,
            count: self.count,
            index: 0,
        }
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        check_position(index, self.count)?;
        Ok(RepeatingCursor {
            value: &self.value,
            count: self.count,
            index,
        })
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        RepeatingSplitter {
            value: &self.value,
            remaining: self.count,
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.value == *value
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (self.value == *value).then_some(0)
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        (self.value == *value).then_some(self.count - 1)
    }

    fn to_vec(&self) -> Vec<T> {
        vec![self.value.clone(); self.count]
    }

    fn fill_array(&self, mut buffer: Vec<Option<T>>) -> Vec<Option<T>> {
        if buffer.len() < self.count {
            return vec![Some(self.value.clone()); self.count];
        }
        buffer[..self.count].fill(Some(self.value.clone()));
        if buffer.len() > self.count {
            buffer[self.count] = None;
        }
        buffer
    }

    /// Hashes the value once and applies the fold `count` times by squaring the affine map
    /// `acc -> 31 * acc + h`, which takes `O(log count)` steps.
    fn ordered_hash<H: BuildHasher>(&self, build_hasher: &H) -> u64
    where
        T: Hash,
    {
        let hash = build_hasher.hash_one(&self.value);
        let (mut mul, mut add) = (1u64, 0u64);
        let (mut base_mul, mut base_add) = (31u64, hash);
        let mut remaining = self.count;
        while remaining > 0 {
            if remaining & 1 == 1 {
                add = base_mul.wrapping_mul(add).wrapping_add(base_add);
                mul = base_mul.wrapping_mul(mul);
            }
            base_add = base_mul.wrapping_mul(base_add).wrapping_add(base_add);
            base_mul = base_mul.wrapping_mul(base_mul);
            remaining >>= 1;
        }
        mul.wrapping_add(add)
    }
}

// Immutable: every mutation is rejected.
impl<T: Clone> SequenceMut for Repeating<T> {}

impl<T, R> PartialEq<R> for Repeating<T>
where
    T: Clone + PartialEq,
    R: Sequence<Item = T>,
{
    fn eq(&self, other: &R) -> bool {
        other.len() == self.count && other.iter().all(|item| item == self.value)
    }
}

impl<T: Clone + Eq> Eq for Repeating<T> {}

impl<T: Clone + PartialEq> PartialEq<Repeating<T>> for Vec<T> {
    fn eq(&self, other: &Repeating<T>) -> bool {
        other == self
    }
}

impl<T: Clone + Hash> Hash for Repeating<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Repeating<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(std::iter::repeat_n(&self.value, self.count))
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Repeating<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.value.to_string();
        f.write_str("[")?;
        for index in 0..self.count {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&rendered)?;
        }
        f.write_str("]")
    }
}

impl<'a, T: Clone> IntoIterator for &'a Repeating<T> {
    type Item = T;
    type IntoIter = Iter<RepeatingCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A cursor over a [`Repeating`] sequence that only tracks its position.
#[derive(Debug)]
pub struct RepeatingCursor<'a, T> {
    value: &'a T,
    count: usize,
    index: usize,
}

impl<T> Clone for RepeatingCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            count: self.count,
            index: self.index,
        }
    }
}

impl<T: Clone> ListCursor for RepeatingCursor<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.index < self.count
    }

    fn has_previous(&self) -> bool {
        self.index > 0
    }

    fn next_index(&self) -> usize {
        self.index
    }

    fn advance(&mut self) -> SeqResult<T> {
        if self.index == self.count {
            return Err(SeqError::NoSuchElement);
        }
        self.index += 1;
        Ok(self.value.clone())
    }

    fn retreat(&mut self) -> SeqResult<T> {
        if self.index == 0 {
            return Err(SeqError::NoSuchElement);
        }
        self.index -= 1;
        Ok(self.value.clone())
    }
}

/// A splitter over a [`Repeating`] sequence that only tracks how many elements remain.
#[derive(Debug)]
pub struct RepeatingSplitter<'a, T> {
    value: &'a T,
    remaining: usize,
}

impl<T: Clone> Splitter for RepeatingSplitter<'_, T> {
    type Item = T;

    fn try_advance(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn try_split(&mut self) -> Option<Self> {
        if self.remaining <= 1 {
            return None;
        }
        let half = self.remaining / 2;
        log::trace!("splitting {} repetitions, handing off {}", self.remaining, half);
        self.remaining -= half;
        Some(Self {
            value: self.value,
            remaining: half,
        })
    }

    fn estimate_size(&self) -> usize {
        self.remaining
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED
            | Characteristics::SIZED
            | Characteristics::SUBSIZED
            | Characteristics::IMMUTABLE
    }

    fn for_each_remaining<G>(&mut self, mut action: G)
    where
        G: FnMut(T),
    {
        while self.remaining > 0 {
            self.remaining -= 1;
            action(self.value.clone());
        }
    }
}

/// A detached range of a [`Repeating`] sequence.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RepeatingSlice<T> {
    /// No elements.
    Empty,
    /// Exactly one element.
    Single(T),
    /// Two or more repetitions.
    Many(Repeating<T>),
}

impl<T: Clone> Sequence for RepeatingSlice<T> {
    type Item = T;
    type Cursor<'a>
        = IndexCursor<'a, Self>
    where
        Self: 'a;
    type Splitter<'a>
        = IndexSplitter<'a, Self>
    where
        Self: 'a;

    fn len(&self) -> usize {
        match self {
            RepeatingSlice::Empty => 0,
            RepeatingSlice::Single(_) => 1,
            RepeatingSlice::Many(repeating) => repeating.count,
        }
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        match self {
            RepeatingSlice::Empty => Err(SeqError::out_of_bounds(index, 0)),
            RepeatingSlice::Single(value) => {
                check_index(index, 1)?;
                Ok(value.clone())
            }
            RepeatingSlice::Many(repeating) => repeating.get(index),
        }
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::front(self)
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        IndexCursor::new(self, index)
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        IndexSplitter::with_characteristics(
            self,
            Characteristics::ORDERED
                | Characteristics::SIZED
                | Characteristics::SUBSIZED
                | Characteristics::IMMUTABLE,
        )
    }
}

// Immutable: every mutation is rejected.
impl<T: Clone> SequenceMut for RepeatingSlice<T> {}

impl<T, R> PartialEq<R> for RepeatingSlice<T>
where
    T: Clone + PartialEq,
    R: Sequence<Item = T>,
{
    fn eq(&self, other: &R) -> bool {
        sequences_eq(self, other)
    }
}

impl<T: Clone + Eq> Eq for RepeatingSlice<T> {}

impl<T: Clone + PartialEq> PartialEq<RepeatingSlice<T>> for Vec<T> {
    fn eq(&self, other: &RepeatingSlice<T>) -> bool {
        sequences_eq(self, other)
    }
}

impl<T: Clone + Hash> Hash for RepeatingSlice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for RepeatingSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self, f)
    }
}

impl<T: Clone + fmt::Display> fmt::Display for RepeatingSlice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self, f)
    }
}

impl<'a, T: Clone> IntoIterator for &'a RepeatingSlice<T> {
    type Item = T;
    type IntoIter = Iter<IndexCursor<'a, RepeatingSlice<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
