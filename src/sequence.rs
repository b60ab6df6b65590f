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

//! Trait definitions for ordered, index-addressable sequences.

use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::cursor::{IndexCursor, Iter, ListCursor};
use crate::result::{SeqError, SeqResult, check_index, check_position};
use crate::splitter::{IndexSplitter, Splitter};

/// A trait for ordered collections that can be read by index.
///
/// This is the capability every view requires of the sequence it wraps, and the capability every
/// view provides in turn, so views compose. Elements are returned by value; sequences that store
/// their elements clone them out, views may compute them on demand.
///
/// Cursors and splitters are associated types so a wrapping view can build on the wrapped
/// sequence's own traversal instead of falling back to index lookups.
///
/// With this trait in scope, `get`, `iter` and `contains` on a `Vec` resolve to the trait
/// methods rather than the slice methods, so `iter` yields owned elements. Call them through
/// `as_slice()` to get the slice versions.
///
/// # Examples
///
/// ```rust
/// use seqviews::Sequence;
///
/// let values = vec!["a", "b", "a"];
/// assert_eq!(Sequence::get(&values, 1).unwrap(), "b");
/// assert_eq!(values.index_of(&"a"), Some(0));
/// assert_eq!(values.last_index_of(&"a"), Some(2));
/// assert_eq!(values.index_of(&"z"), None);
/// ```
pub trait Sequence {
    /// The type of elements in the sequence.
    type Item;

    /// The bidirectional cursor type.
    type Cursor<'a>: ListCursor<Item = Self::Item>
    where
        Self: 'a;

    /// The splittable traversal type.
    type Splitter<'a>: Splitter<Item = Self::Item>
    where
        Self: 'a;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or [`SeqError::IndexOutOfBounds`].
    fn get(&self, index: usize) -> SeqResult<Self::Item>;

    /// Returns a cursor positioned in front of the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Returns a cursor positioned in front of `index`; `index` may equal `len()`.
    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>>;

    /// Returns a splitter over all elements.
    fn splitter(&self) -> Self::Splitter<'_>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the elements in order.
    fn iter(&self) -> Iter<Self::Cursor<'_>> {
        Iter::new(self.cursor())
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the index of the first element equal to `value`.
    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.iter().position(|item| item == *value)
    }

    /// Returns the index of the last element equal to `value`.
    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (0..self.len())
            .rev()
            .find(|&index| self.get(index).is_ok_and(|item| item == *value))
    }

    /// Collects every element into a newly allocated vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }

    /// Copies the elements into `buffer`, allocating a new one if it is too short.
    ///
    /// When `buffer` is longer than the sequence, the slot right after the last element is set
    /// to `None` and the slots after that are left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqviews::{Repeating, Sequence};
    ///
    /// let view = Repeating::new("1", 2).unwrap();
    /// let filled = view.fill_array(vec![Some("6"); 4]);
    /// assert_eq!(filled, vec![Some("1"), Some("1"), None, Some("6")]);
    /// ```
    fn fill_array(&self, mut buffer: Vec<Option<Self::Item>>) -> Vec<Option<Self::Item>> {
        let len = self.len();
        if buffer.len() < len {
            return self.iter().map(Some).collect();
        }
        for (slot, item) in buffer.iter_mut().zip(self.iter()) {
            *slot = Some(item);
        }
        if buffer.len() > len {
            buffer[len] = None;
        }
        buffer
    }

    /// Folds the element hashes with the ordered-sequence recurrence `31 * acc + hash(item)`,
    /// starting from 1.
    ///
    /// Two sequences with equal elements in the same order produce the same value for the same
    /// `build_hasher`, whatever their concrete types.
    fn ordered_hash<H: BuildHasher>(&self, build_hasher: &H) -> u64
    where
        Self::Item: Hash,
    {
        self.iter().fold(1u64, |acc, item| {
            acc.wrapping_mul(31)
                .wrapping_add(build_hasher.hash_one(&item))
        })
    }

    /// Returns a rayon parallel iterator driven by this sequence's splitter.
    #[cfg(feature = "rayon")]
    fn par_elements(&self) -> crate::parallel::ParSplitter<Self::Splitter<'_>> {
        crate::parallel::ParSplitter::new(self.splitter())
    }
}

/// The optional mutation operations of a sequence.
///
/// Every method rejects the call with [`SeqError::UnsupportedOperation`] unless the
/// implementation overrides it, so read-only views implement this trait with an empty body and
/// still behave like a list whose mutators refuse to run. Implementations must validate before
/// mutating: a call that fails leaves the sequence unchanged.
pub trait SequenceMut: Sequence {
    /// Replaces the element at `index`, returning the previous element.
    fn set(&mut self, index: usize, value: Self::Item) -> SeqResult<Self::Item> {
        let _ = (index, value);
        Err(SeqError::UnsupportedOperation("set"))
    }

    /// Appends an element to the end.
    fn push(&mut self, value: Self::Item) -> SeqResult<()> {
        let _ = value;
        Err(SeqError::UnsupportedOperation("push"))
    }

    /// Inserts an element at `index`, shifting later elements back.
    fn insert(&mut self, index: usize, value: Self::Item) -> SeqResult<()> {
        let _ = (index, value);
        Err(SeqError::UnsupportedOperation("insert"))
    }

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> SeqResult<Self::Item> {
        let _ = index;
        Err(SeqError::UnsupportedOperation("remove"))
    }

    /// Removes the first element equal to `value`, returning whether one was found.
    fn remove_item(&mut self, value: &Self::Item) -> SeqResult<bool>
    where
        Self::Item: PartialEq,
    {
        let _ = value;
        Err(SeqError::UnsupportedOperation("remove_item"))
    }

    /// Appends every element of `values`.
    fn extend_from<I>(&mut self, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let _ = values;
        Err(SeqError::UnsupportedOperation("extend_from"))
    }

    /// Inserts every element of `values` at `index`, keeping their order.
    fn insert_all<I>(&mut self, index: usize, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let _ = (index, values);
        Err(SeqError::UnsupportedOperation("insert_all"))
    }

    /// Removes every element.
    fn clear(&mut self) -> SeqResult<()> {
        Err(SeqError::UnsupportedOperation("clear"))
    }

    /// Keeps only the elements for which `keep` returns `true`.
    fn retain<P>(&mut self, keep: P) -> SeqResult<()>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let _ = keep;
        Err(SeqError::UnsupportedOperation("retain"))
    }
}

// Implementation for slices
impl<T: Clone> Sequence for [T] {
    type Item = T;
    type Cursor<'a>
        = IndexCursor<'a, [T]>
    where
        Self: 'a;
    type Splitter<'a>
        = IndexSplitter<'a, [T]>
    where
        Self: 'a;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        <[T]>::get(self, index)
            .cloned()
            .ok_or_else(|| SeqError::out_of_bounds(index, <[T]>::len(self)))
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

impl<T: Clone> SequenceMut for [T] {
    fn set(&mut self, index: usize, value: T) -> SeqResult<T> {
        check_index(index, <[T]>::len(self))?;
        Ok(std::mem::replace(&mut self[index], value))
    }
}

// Implementation for Vec<T>
impl<T: Clone> Sequence for Vec<T> {
    type Item = T;
    type Cursor<'a>
        = IndexCursor<'a, Vec<T>>
    where
        Self: 'a;
    type Splitter<'a>
        = IndexSplitter<'a, Vec<T>>
    where
        Self: 'a;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        Sequence::get(self.as_slice(), index)
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

impl<T: Clone> SequenceMut for Vec<T> {
    fn set(&mut self, index: usize, value: T) -> SeqResult<T> {
        SequenceMut::set(self.as_mut_slice(), index, value)
    }

    fn push(&mut self, value: T) -> SeqResult<()> {
        Vec::push(self, value);
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> SeqResult<()> {
        check_position(index, Vec::len(self))?;
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> SeqResult<T> {
        check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }

    fn remove_item(&mut self, value: &T) -> SeqResult<bool>
    where
        T: PartialEq,
    {
        match self.as_slice().iter().position(|item| item == value) {
            Some(index) => {
                Vec::remove(self, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn extend_from<I>(&mut self, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, values);
        Ok(())
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        check_position(index, Vec::len(self))?;
        let tail = Vec::split_off(self, index);
        Extend::extend(self, values);
        Extend::extend(self, tail);
        Ok(())
    }

    fn clear(&mut self) -> SeqResult<()> {
        Vec::clear(self);
        Ok(())
    }

    fn retain<P>(&mut self, mut keep: P) -> SeqResult<()>
    where
        P: FnMut(&T) -> bool,
    {
        Vec::retain(self, |item| keep(item));
        Ok(())
    }
}

// Shared references read through and reject every mutation.
impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;
    type Splitter<'a>
        = S::Splitter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> SeqResult<Self::Item> {
        (**self).get(index)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        (**self).cursor_at(index)
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        (**self).splitter()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        (**self).contains(value)
    }

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (**self).index_of(value)
    }

    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (**self).last_index_of(value)
    }
}

impl<S: Sequence + ?Sized> SequenceMut for &S {}

// Exclusive references forward everything, mutations included.
impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;
    type Cursor<'a>
        = S::Cursor<'a>
    where
        Self: 'a;
    type Splitter<'a>
        = S::Splitter<'a>
    where
        Self: 'a;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> SeqResult<Self::Item> {
        (**self).get(index)
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        (**self).cursor_at(index)
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        (**self).splitter()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        (**self).contains(value)
    }

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (**self).index_of(value)
    }

    fn last_index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (**self).last_index_of(value)
    }
}

impl<S: SequenceMut + ?Sized> SequenceMut for &mut S {
    fn set(&mut self, index: usize, value: Self::Item) -> SeqResult<Self::Item> {
        (**self).set(index, value)
    }

    fn push(&mut self, value: Self::Item) -> SeqResult<()> {
        (**self).push(value)
    }

    fn insert(&mut self, index: usize, value: Self::Item) -> SeqResult<()> {
        (**self).insert(index, value)
    }

    fn remove(&mut self, index: usize) -> SeqResult<Self::Item> {
        (**self).remove(index)
    }

    fn remove_item(&mut self, value: &Self::Item) -> SeqResult<bool>
    where
        Self::Item: PartialEq,
    {
        (**self).remove_item(value)
    }

    fn extend_from<I>(&mut self, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        (**self).extend_from(values)
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        (**self).insert_all(index, values)
    }

    fn clear(&mut self) -> SeqResult<()> {
        (**self).clear()
    }

    fn retain<P>(&mut self, keep: P) -> SeqResult<()>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        (**self).retain(keep)
    }
}

/// Index-aligned equality of two sequences.
pub(crate) fn sequences_eq<A, B>(left: &A, right: &B) -> bool
where
    A: Sequence + ?Sized,
    B: Sequence<Item = A::Item> + ?Sized,
    A::Item: PartialEq,
{
    left.len() == right.len() && left.iter().zip(right.iter()).all(|(l, r)| l == r)
}

/// Feeds a sequence to `state` exactly the way `[T]` does: length prefix, then each element.
pub(crate) fn hash_sequence<S, H>(sequence: &S, state: &mut H)
where
    S: Sequence + ?Sized,
    S::Item: Hash,
    H: Hasher,
{
    state.write_usize(sequence.len());
    for item in sequence.iter() {
        item.hash(state);
    }
}

/// Renders `[a, b, c]`.
pub(crate) fn fmt_display<S>(sequence: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: Sequence + ?Sized,
    S::Item: fmt::Display,
{
    f.write_str("[")?;
    for (index, item) in sequence.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

/// Renders the sequence as a debug list.
pub(crate) fn fmt_debug<S>(sequence: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    S: Sequence + ?Sized,
    S::Item: fmt::Debug,
{
    f.debug_list().entries(sequence.iter()).finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;
    use std::hash::DefaultHasher;

    #[test]
    fn test_vec_get_out_of_bounds() {
        let values = vec![1, 2, 3];
        assert_eq!(Sequence::get(&values, 2).unwrap(), 3);
        assert!(matches!(
            Sequence::get(&values, 3),
            Err(SeqError::IndexOutOfBounds { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_vec_mutations() {
        let mut values = vec![1, 2, 3];
        assert_eq!(SequenceMut::set(&mut values, 0, 10).unwrap(), 1);
        SequenceMut::push(&mut values, 4).unwrap();
        SequenceMut::insert(&mut values, 1, 5).unwrap();
        assert_eq!(values, vec![10, 5, 2, 3, 4]);
        assert_eq!(SequenceMut::remove(&mut values, 0).unwrap(), 10);
        assert!(SequenceMut::remove_item(&mut values, &3).unwrap());
        assert!(!SequenceMut::remove_item(&mut values, &3).unwrap());
        values.insert_all(1, [7, 8]).unwrap();
        assert_eq!(values, vec![5, 7, 8, 2, 4]);
        SequenceMut::retain(&mut values, |item| item % 2 == 0).unwrap();
        assert_eq!(values, vec![8, 2, 4]);
        SequenceMut::clear(&mut values).unwrap();
        assert!(Sequence::is_empty(&values));
    }

    #[test]
    fn test_vec_rejects_bad_positions_without_change() {
        let mut values = vec![1, 2];
        assert!(SequenceMut::insert(&mut values, 3, 9).is_err());
        assert!(SequenceMut::remove(&mut values, 2).is_err());
        assert!(values.insert_all(5, [1]).is_err());
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_slice_set_only() {
        let mut values = [1, 2, 3];
        let slice: &mut [i32] = &mut values;
        assert_eq!(SequenceMut::set(slice, 1, 20).unwrap(), 2);
        assert!(matches!(
            SequenceMut::push(slice, 4),
            Err(SeqError::UnsupportedOperation("push"))
        ));
        assert_eq!(values, [1, 20, 3]);
    }

    #[test]
    fn test_shared_reference_is_read_only() {
        let values = vec![1, 2, 3];
        let mut shared = &values;
        assert_eq!(Sequence::len(&shared), 3);
        assert!(matches!(
            SequenceMut::set(&mut shared, 0, 5),
            Err(SeqError::UnsupportedOperation("set"))
        ));
    }

    #[test]
    fn test_exclusive_reference_forwards_mutation() {
        let mut values = vec![1, 2, 3];
        {
            let mut exclusive = &mut values;
            SequenceMut::push(&mut exclusive, 4).unwrap();
            SequenceMut::set(&mut exclusive, 0, 0).unwrap();
        }
        assert_eq!(values, vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_search() {
        let values = vec!["0", "1", "1", "1"];
        assert!(Sequence::contains(&values, &"1"));
        assert_eq!(values.index_of(&"1"), Some(1));
        assert_eq!(values.last_index_of(&"1"), Some(3));
        assert_eq!(values.last_index_of(&"2"), None);
    }

    #[test]
    fn test_fill_array() {
        let values = vec!["a", "b"];
        assert_eq!(values.fill_array(Vec::new()), vec![Some("a"), Some("b")]);
        assert_eq!(
            values.fill_array(vec![Some("x"); 2]),
            vec![Some("a"), Some("b")]
        );
        assert_eq!(
            values.fill_array(vec![Some("x"); 4]),
            vec![Some("a"), Some("b"), None, Some("x")]
        );
    }

    #[test]
    fn test_ordered_hash_matches_manual_fold() {
        let state = RandomState::new();
        let values = vec!["a".to_string(), "b".to_string()];
        let expected = 1u64
            .wrapping_mul(31)
            .wrapping_add(state.hash_one("a".to_string()))
            .wrapping_mul(31)
            .wrapping_add(state.hash_one("b".to_string()));
        assert_eq!(values.ordered_hash(&state), expected);
    }

    #[test]
    fn test_hash_sequence_matches_slice_hash() {
        let values = vec!["x".to_string(), "y".to_string()];

        let mut expected = DefaultHasher::new();
        values.hash(&mut expected);

        let mut actual = DefaultHasher::new();
        hash_sequence(&values, &mut actual);

        assert_eq!(expected.finish(), actual.finish());
    }
}
