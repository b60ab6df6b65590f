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

//! Bidirectional cursors over sequences.

use crate::result::{SeqError, SeqResult, check_position};
use crate::sequence::{Sequence, SequenceMut};

/// A cursor that sits *between* elements and can move in both directions.
///
/// A cursor over a sequence of length `n` has `n + 1` positions. `advance` returns the element
/// after the cursor and moves past it, `retreat` returns the element before the cursor and moves
/// in front of it.
///
/// # Examples
///
/// ```rust
/// use seqviews::{ListCursor, Repeating, Sequence};
///
/// let view = Repeating::new("a", 2).unwrap();
/// let mut cursor = view.cursor();
///
/// assert_eq!(cursor.advance().unwrap(), "a");
/// assert_eq!(cursor.advance().unwrap(), "a");
/// assert!(cursor.advance().is_err());
/// assert_eq!(cursor.retreat().unwrap(), "a");
/// assert_eq!(cursor.next_index(), 1);
/// ```
pub trait ListCursor {
    /// The type of elements yielded by the cursor.
    type Item;

    /// Returns `true` if `advance` would yield an element.
    fn has_next(&self) -> bool;

    /// Returns `true` if `retreat` would yield an element.
    fn has_previous(&self) -> bool;

    /// The index of the element that `advance` would return.
    fn next_index(&self) -> usize;

    /// The index of the element that `retreat` would return, `None` at the front.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Returns the next element and moves the cursor past it.
    ///
    /// Fails with [`SeqError::NoSuchElement`] at the end of the sequence.
    fn advance(&mut self) -> SeqResult<Self::Item>;

    /// Returns the previous element and moves the cursor in front of it.
    ///
    /// Fails with [`SeqError::NoSuchElement`] at the start of the sequence.
    fn retreat(&mut self) -> SeqResult<Self::Item>;

    /// Replaces the element most recently returned by `advance` or `retreat`.
    ///
    /// Cursors over read-only views reject this with [`SeqError::UnsupportedOperation`].
    fn set(&mut self, value: Self::Item) -> SeqResult<()> {
        let _ = value;
        Err(SeqError::UnsupportedOperation("cursor set"))
    }
}

/// Adapts a [`ListCursor`] into a forward [`Iterator`].
#[derive(Debug, Clone)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: ListCursor> Iter<C> {
    /// Wraps a cursor, iterating from its current position.
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Returns the wrapped cursor at its current position.
    pub fn into_cursor(self) -> C {
        self.cursor
    }
}

impl<C: ListCursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance().ok()
    }
}

/// A read-only cursor that addresses any [`Sequence`] by index.
#[derive(Debug)]
pub struct IndexCursor<'a, S: ?Sized> {
    sequence: &'a S,
    next: usize,
}

impl<'a, S: Sequence + ?Sized> IndexCursor<'a, S> {
    /// Creates a cursor positioned in front of the first element.
    pub fn front(sequence: &'a S) -> Self {
        Self { sequence, next: 0 }
    }

    /// Creates a cursor positioned in front of `index`.
    ///
    /// `index` may equal the sequence length, which positions the cursor at the end.
    pub fn new(sequence: &'a S, index: usize) -> SeqResult<Self> {
        check_position(index, sequence.len())?;
        Ok(Self {
            sequence,
            next: index,
        })
    }
}

impl<S: ?Sized> Clone for IndexCursor<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            next: self.next,
        }
    }
}

impl<S: Sequence + ?Sized> ListCursor for IndexCursor<'_, S> {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        self.next < self.sequence.len()
    }

    fn has_previous(&self) -> bool {
        self.next > 0
    }

    fn next_index(&self) -> usize {
        self.next
    }

    fn advance(&mut self) -> SeqResult<Self::Item> {
        let item = self
            .sequence
            .get(self.next)
            .map_err(|_| SeqError::NoSuchElement)?;
        self.next += 1;
        Ok(item)
    }

    fn retreat(&mut self) -> SeqResult<Self::Item> {
        let index = self.next.checked_sub(1).ok_or(SeqError::NoSuchElement)?;
        let item = self.sequence.get(index)?;
        self.next = index;
        Ok(item)
    }
}

/// A cursor holding exclusive access to a [`SequenceMut`], able to write through `set`.
///
/// # Examples
///
/// ```rust
/// use seqviews::{IndexCursorMut, ListCursor};
///
/// let mut values = vec![1, 2, 3];
/// let mut cursor = IndexCursorMut::new(&mut values, 0).unwrap();
///
/// // Nothing has been returned yet, so there is nothing to replace.
/// assert!(cursor.set(10).is_err());
///
/// cursor.advance().unwrap();
/// cursor.set(10).unwrap();
/// assert_eq!(values, vec![10, 2, 3]);
/// ```
#[derive(Debug)]
pub struct IndexCursorMut<'a, S: ?Sized> {
    sequence: &'a mut S,
    next: usize,
    last: Option<usize>,
}

impl<'a, S: SequenceMut + ?Sized> IndexCursorMut<'a, S> {
    /// Creates a cursor positioned in front of the first element.
    pub fn front(sequence: &'a mut S) -> Self {
        Self {
            sequence,
            next: 0,
            last: None,
        }
    }

    /// Creates a cursor positioned in front of `index`.
    pub fn new(sequence: &'a mut S, index: usize) -> SeqResult<Self> {
        check_position(index, sequence.len())?;
        Ok(Self {
            sequence,
            next: index,
            last: None,
        })
    }
}

impl<S: SequenceMut + ?Sized> ListCursor for IndexCursorMut<'_, S> {
    type Item = S::Item;

    fn has_next(&self) -> bool {
        self.next < self.sequence.len()
    }

    fn has_previous(&self) -> bool {
        self.next > 0
    }

    fn next_index(&self) -> usize {
        self.next
    }

    fn advance(&mut self) -> SeqResult<Self::Item> {
        let item = self
            .sequence
            .get(self.next)
            .map_err(|_| SeqError::NoSuchElement)?;
        self.last = Some(self.next);
        self.next += 1;
        Ok(item)
    }

    fn retreat(&mut self) -> SeqResult<Self::Item> {
        let index = self.next.checked_sub(1).ok_or(SeqError::NoSuchElement)?;
        let item = self.sequence.get(index)?;
        self.next = index;
        self.last = Some(index);
        Ok(item)
    }

    fn set(&mut self, value: Self::Item) -> SeqResult<()> {
        let index = self
            .last
            .ok_or(SeqError::InvalidState("no element has been returned yet"))?;
        self.sequence.set(index, value).map(|_| ())
    }
}
