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

//! Live windows over a range of another sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Range, RangeBounds};

use crate::cursor::{IndexCursor, Iter};
use crate::result::{SeqError, SeqResult, check_index, check_position, resolve_range};
use crate::sequence::{Sequence, SequenceMut, fmt_debug, fmt_display, hash_sequence, sequences_eq};
use crate::splitter::IndexSplitter;

/// A live view of the index range `[offset, offset + len)` of a backing sequence.
///
/// Reads and `set` go straight through to the backing sequence. Positional `push`, `insert`,
/// `remove` and `clear` are forwarded as well and grow or shrink the window to match, so the
/// window keeps covering the same logical elements. `clear` and `retain` either remove every
/// element they select or, when the backing sequence rejects one removal, none of them.
///
/// # Examples
///
/// ```rust
/// use seqviews::{SequenceMut, SubSequence};
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// {
///     let mut middle = SubSequence::new(&mut values, 1..4).unwrap();
///     middle.set(0, 20).unwrap();
///     middle.remove(2).unwrap();
///     middle.push(40).unwrap();
/// }
/// assert_eq!(values, vec![1, 20, 3, 40, 5]);
/// ```
#[derive(Clone, Copy)]
pub struct SubSequence<B> {
    backing: B,
    offset: usize,
    len: usize,
}

impl<B: Sequence> SubSequence<B> {
    /// Creates a window over `range` of `backing`.
    ///
    /// Fails with [`SeqError::IndexOutOfBounds`](crate::SeqError) if the range ends past the
    /// backing sequence and with [`SeqError::InvalidArgument`](crate::SeqError) if it starts after
    /// it ends.
    pub fn new<R: RangeBounds<usize>>(backing: B, range: R) -> SeqResult<Self> {
        let Range { start, end } = resolve_range(&range, backing.len())?;
        Ok(Self {
            backing,
            offset: start,
            len: end - start,
        })
    }
}

impl<B> SubSequence<B> {
    /// The index in the backing sequence of the window's first element.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the backing sequence.
    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Returns the backing sequence, dropping the window.
    pub fn into_inner(self) -> B {
        self.backing
    }
}

impl<B: SequenceMut> SubSequence<B> {
    /// Removes the window elements at `indices`, which must be ascending. When the backing
    /// sequence rejects a removal, the elements already removed are put back first.
    fn remove_ascending(&mut self, indices: &[usize]) -> SeqResult<()> {
        let mut removed = Vec::with_capacity(indices.len());
        for &index in indices {
            // Earlier removals shifted this element towards the front.
            let position = self.offset + index - removed.len();
            match self.backing.remove(position) {
                Ok(item) => removed.push((index, item)),
                Err(error) => {
                    self.restore(removed);
                    return Err(error);
                }
            }
        }
        self.len -= removed.len();
        Ok(())
    }

    fn restore(&mut self, removed: Vec<(usize, B::Item)>) {
        for (index, item) in removed {
            if let Err(error) = self.backing.insert(self.offset + index, item) {
                log::warn!("failed to restore window element {index}: {error}");
            }
        }
    }
}

/// Reports a rejection of a forwarded call under the name of the call the caller made.
fn rename_unsupported(error: SeqError, forwarded: &str, called: &'static str) -> SeqError {
    match error {
        SeqError::UnsupportedOperation(name) if name == forwarded => {
            SeqError::UnsupportedOperation(called)
        }
        other => other,
    }
}

impl<B: Sequence> Sequence for SubSequence<B> {
    type Item = B::Item;
    type Cursor<'a>
        = IndexCursor<'a, Self>
    where
        Self: 'a;
    type Splitter<'a>
        = IndexSplitter<'a, Self>
    where
        Self: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> SeqResult<Self::Item> {
        check_index(index, self.len)?;
        self.backing.get(self.offset + index)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        IndexCursor::front(self)
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        IndexCursor::new(self, index)
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        IndexSplitter::new(self)
    }
}

impl<B: SequenceMut> SequenceMut for SubSequence<B> {
    fn set(&mut self, index: usize, value: Self::Item) -> SeqResult<Self::Item> {
        check_index(index, self.len)?;
        self.backing.set(self.offset + index, value)
    }

    fn push(&mut self, value: Self::Item) -> SeqResult<()> {
        self.backing
            .insert(self.offset + self.len, value)
            .map_err(|error| rename_unsupported(error, "insert", "push"))?;
        self.len += 1;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: Self::Item) -> SeqResult<()> {
        check_position(index, self.len)?;
        self.backing.insert(self.offset + index, value)?;
        self.len += 1;
        Ok(())
    }

    fn remove(&mut self, index: usize) -> SeqResult<Self::Item> {
        check_index(index, self.len)?;
        let removed = self.backing.remove(self.offset + index)?;
        self.len -= 1;
        Ok(removed)
    }

    fn remove_item(&mut self, value: &Self::Item) -> SeqResult<bool>
    where
        Self::Item: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).map(|_| true),
            None => Ok(false),
        }
    }

    fn extend_from<I>(&mut self, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let end = self.len;
        self.insert_all(end, values)
            .map_err(|error| rename_unsupported(error, "insert_all", "extend_from"))
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        check_position(index, self.len)?;
        let values: Vec<_> = values.into_iter().collect();
        let added = values.len();
        self.backing.insert_all(self.offset + index, values)?;
        self.len += added;
        Ok(())
    }

    fn clear(&mut self) -> SeqResult<()> {
        let all: Vec<usize> = (0..self.len).collect();
        self.remove_ascending(&all)
    }

    fn retain<P>(&mut self, mut keep: P) -> SeqResult<()>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut rejected = Vec::new();
        for index in 0..self.len {
            let item = self.get(index)?;
            if !keep(&item) {
                rejected.push(index);
            }
        }
        self.remove_ascending(&rejected)
    }
}

impl<B, R> PartialEq<R> for SubSequence<B>
where
    B: Sequence,
    B::Item: PartialEq,
    R: Sequence<Item = B::Item>,
{
    fn eq(&self, other: &R) -> bool {
        sequences_eq(self, other)
    }
}

impl<B> Eq for SubSequence<B>
where
    B: Sequence,
    B::Item: Eq,
{
}

impl<T, B> PartialEq<SubSequence<B>> for Vec<T>
where
    T: Clone + PartialEq,
    B: Sequence<Item = T>,
{
    fn eq(&self, other: &SubSequence<B>) -> bool {
        sequences_eq(self, other)
    }
}

impl<B> Hash for SubSequence<B>
where
    B: Sequence,
    B::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<B> fmt::Debug for SubSequence<B>
where
    B: Sequence,
    B::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self, f)
    }
}

impl<B> fmt::Display for SubSequence<B>
where
    B: Sequence,
    B::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self, f)
    }
}

impl<'a, B: Sequence> IntoIterator for &'a SubSequence<B> {
    type Item = B::Item;
    type IntoIter = Iter<IndexCursor<'a, SubSequence<B>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
