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

//! A head element logically prepended to a tail sequence.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::RangeBounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cursor::{IndexCursor, IndexCursorMut, Iter};
use crate::result::{SeqError, SeqResult, check_index, check_position};
use crate::sequence::{Sequence, SequenceMut, fmt_debug, fmt_display, hash_sequence, sequences_eq};
use crate::splitter::IndexSplitter;
use crate::subseq::SubSequence;

/// A sequence made of one `head` element followed by every element of a `tail` sequence.
///
/// Prepending to a vector is linear in its length; wrapping it in a `Prefixed` is constant. Index
/// 0 addresses the head and index `i > 0` addresses `tail[i - 1]`, so the view is never empty.
///
/// The head can be replaced but never removed, and nothing can be inserted in front of it.
/// Every other mutation is forwarded to the tail and succeeds if the tail supports it.
/// Nesting prefixed views is allowed; each layer adds one hop to every access.
///
/// # Examples
///
/// ```rust
/// use seqviews::{Prefixed, Sequence, SequenceMut};
///
/// let mut list = Prefixed::new(0, vec![1, 2, 3]);
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.get(0).unwrap(), 0);
///
/// list.set(0, 10).unwrap();
/// list.push(4).unwrap();
/// assert_eq!(list, vec![10, 1, 2, 3, 4]);
///
/// assert!(list.remove(0).is_err());
/// assert!(list.insert(0, 5).is_err());
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Prefixed<T, B> {
    head: T,
    tail: B,
}

impl<T, B> Prefixed<T, B> {
    /// Creates a sequence of `head` followed by `tail`.
    pub fn new(head: T, tail: B) -> Self {
        Self { head, tail }
    }

    /// Returns the head element.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Returns the tail sequence.
    pub fn tail(&self) -> &B {
        &self.tail
    }

    /// Returns the tail sequence mutably.
    pub fn tail_mut(&mut self) -> &mut B {
        &mut self.tail
    }

    /// Splits the view into its head and tail.
    pub fn into_parts(self) -> (T, B) {
        (self.head, self.tail)
    }
}

impl<T, B> Prefixed<T, B>
where
    T: Clone,
    B: Sequence<Item = T>,
{
    /// Returns a live window over `range`.
    ///
    /// A window starting at 0 reads the current head, so a head replaced later is observed.
    pub fn sub_sequence<R>(&self, range: R) -> SeqResult<SubSequence<&Self>>
    where
        R: RangeBounds<usize>,
    {
        SubSequence::new(self, range)
    }
}

impl<T, B> Prefixed<T, B>
where
    T: Clone,
    B: SequenceMut<Item = T>,
{
    /// Returns a window over `range` that writes through to this view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqviews::{Prefixed, SequenceMut};
    ///
    /// let mut list = Prefixed::new("0", vec!["1", "2", "3", "4"]);
    /// list.sub_sequence_mut(1..5).unwrap().set(0, "X").unwrap();
    /// assert_eq!(list, vec!["0", "X", "2", "3", "4"]);
    /// ```
    pub fn sub_sequence_mut<R>(&mut self, range: R) -> SeqResult<SubSequence<&mut Self>>
    where
        R: RangeBounds<usize>,
    {
        SubSequence::new(self, range)
    }

    /// Returns a cursor in front of the head that can replace elements as it walks.
    pub fn cursor_mut(&mut self) -> IndexCursorMut<'_, Self> {
        IndexCursorMut::front(self)
    }

    /// Returns a mutable cursor positioned in front of `index`.
    pub fn cursor_mut_at(&mut self, index: usize) -> SeqResult<IndexCursorMut<'_, Self>> {
        IndexCursorMut::new(self, index)
    }
}

impl<T, B> Sequence for Prefixed<T, B>
where
    T: Clone,
    B: Sequence<Item = T>,
{
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
        self.tail.len() + 1
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        if index == 0 {
            return Ok(self.head.clone());
        }
        check_index(index, self.len())?;
        self.tail.get(index - 1)
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

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.head == *value || self.tail.contains(value)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        if self.head == *value {
            Some(0)
        } else {
            self.tail.index_of(value).map(|index| index + 1)
        }
    }

    fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        match self.tail.last_index_of(value) {
            Some(index) => Some(index + 1),
            None if self.head == *value => Some(0),
            None => None,
        }
    }
}

impl<T, B> SequenceMut for Prefixed<T, B>
where
    T: Clone,
    B: SequenceMut<Item = T>,
{
    fn set(&mut self, index: usize, value: T) -> SeqResult<T> {
        if index == 0 {
            return Ok(mem::replace(&mut self.head, value));
        }
        check_index(index, self.len())?;
        self.tail.set(index - 1, value)
    }

    fn push(&mut self, value: T) -> SeqResult<()> {
        self.tail.push(value)
    }

    fn insert(&mut self, index: usize, value: T) -> SeqResult<()> {
        if index == 0 {
            log::debug!("rejecting insert in front of the head of a prefixed sequence");
            return Err(SeqError::UnsupportedOperation("insert at the head"));
        }
        check_position(index, self.len())?;
        self.tail.insert(index - 1, value)
    }

    fn remove(&mut self, index: usize) -> SeqResult<T> {
        if index == 0 {
            log::debug!("rejecting removal of the head of a prefixed sequence");
            return Err(SeqError::UnsupportedOperation("remove the head"));
        }
        check_index(index, self.len())?;
        self.tail.remove(index - 1)
    }

    fn remove_item(&mut self, value: &T) -> SeqResult<bool>
    where
        T: PartialEq,
    {
        if self.head == *value {
            log::debug!("rejecting removal of the head of a prefixed sequence by value");
            return Err(SeqError::UnsupportedOperation("remove the head"));
        }
        self.tail.remove_item(value)
    }

    fn extend_from<I>(&mut self, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        self.tail.extend_from(values)
    }

    fn insert_all<I>(&mut self, index: usize, values: I) -> SeqResult<()>
    where
        I: IntoIterator<Item = T>,
    {
        if index == 0 {
            log::debug!("rejecting bulk insert in front of the head of a prefixed sequence");
            return Err(SeqError::UnsupportedOperation("insert at the head"));
        }
        check_position(index, self.len())?;
        self.tail.insert_all(index - 1, values)
    }

    fn clear(&mut self) -> SeqResult<()> {
        log::debug!("rejecting clear of a prefixed sequence");
        Err(SeqError::UnsupportedOperation("clear"))
    }

    fn retain<P>(&mut self, mut keep: P) -> SeqResult<()>
    where
        P: FnMut(&T) -> bool,
    {
        if !keep(&self.head) {
            log::debug!("rejecting retain that would drop the head of a prefixed sequence");
            return Err(SeqError::UnsupportedOperation("remove the head"));
        }
        self.tail.retain(keep)
    }
}

impl<T, B, R> PartialEq<R> for Prefixed<T, B>
where
    T: Clone + PartialEq,
    B: Sequence<Item = T>,
    R: Sequence<Item = T>,
{
    fn eq(&self, other: &R) -> bool {
        sequences_eq(self, other)
    }
}

impl<T, B> Eq for Prefixed<T, B>
where
    T: Clone + Eq,
    B: Sequence<Item = T>,
{
}

impl<T, B> PartialEq<Prefixed<T, B>> for Vec<T>
where
    T: Clone + PartialEq,
    B: Sequence<Item = T>,
{
    fn eq(&self, other: &Prefixed<T, B>) -> bool {
        sequences_eq(self, other)
    }
}

impl<T, B> Hash for Prefixed<T, B>
where
    T: Clone + Hash,
    B: Sequence<Item = T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_sequence(self, state);
    }
}

impl<T, B> fmt::Debug for Prefixed<T, B>
where
    T: Clone + fmt::Debug,
    B: Sequence<Item = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_debug(self, f)
    }
}

impl<T, B> fmt::Display for Prefixed<T, B>
where
    T: Clone + fmt::Display,
    B: Sequence<Item = T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_display(self, f)
    }
}

impl<'a, T, B> IntoIterator for &'a Prefixed<T, B>
where
    T: Clone,
    B: Sequence<Item = T>,
{
    type Item = T;
    type IntoIter = Iter<IndexCursor<'a, Prefixed<T, B>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::ListCursor;
    use crate::splitter::Splitter;
    use std::hash::DefaultHasher;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn list() -> Prefixed<String, Vec<String>> {
        Prefixed::new("0".to_string(), strings(&["1", "2", "3", "4"]))
    }

    #[test]
    fn test_get() {
        let list = list();
        for (index, expected) in ["0", "1", "2", "3", "4"].iter().enumerate() {
            assert_eq!(list.get(index).unwrap(), *expected);
        }
        assert!(matches!(
            list.get(5),
            Err(SeqError::IndexOutOfBounds { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_size() {
        let list = list();
        assert_eq!(list.len(), 5);
        assert!(!list.is_empty());

        let lonely = Prefixed::new(1, Vec::<i32>::new());
        assert_eq!(lonely.len(), 1);
        assert!(!lonely.is_empty());
    }

    #[test]
    fn test_push() {
        let mut list = list();
        list.push("5".to_string()).unwrap();
        assert_eq!(list, strings(&["0", "1", "2", "3", "4", "5"]));
    }

    #[test]
    fn test_insert() {
        let mut list = list();
        list.insert(2, "5".to_string()).unwrap();
        assert_eq!(list, strings(&["0", "1", "5", "2", "3", "4"]));
        list.insert(6, "6".to_string()).unwrap();
        assert_eq!(list.last_index_of(&"6".to_string()), Some(6));
        assert!(matches!(
            list.insert(8, "x".to_string()),
            Err(SeqError::IndexOutOfBounds { index: 8, len: 7 })
        ));
    }

    #[test]
    fn test_insert_at_head_unsupported() {
        let mut list = list();
        assert!(matches!(
            list.insert(0, "x".to_string()),
            Err(SeqError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            list.insert_all(0, strings(&["x"])),
            Err(SeqError::UnsupportedOperation(_))
        ));
        assert_eq!(list, strings(&["0", "1", "2", "3", "4"]));
    }

    #[test]
    fn test_extend_from() {
        let mut list = list();
        list.extend_from(strings(&["5", "6"])).unwrap();
        assert_eq!(list, strings(&["0", "1", "2", "3", "4", "5", "6"]));
    }

    #[test]
    fn test_insert_all() {
        let mut list = list();
        list.insert_all(2, strings(&["5", "6"])).unwrap();
        assert_eq!(list, strings(&["0", "1", "5", "6", "2", "3", "4"]));
    }

    #[test]
    fn test_remove_item() {
        let mut list = list();
        assert!(list.remove_item(&"1".to_string()).unwrap());
        assert_eq!(list, strings(&["0", "2", "3", "4"]));
        assert!(!list.remove_item(&"9".to_string()).unwrap());
    }

    #[test]
    fn test_remove_head_by_value_unsupported() {
        let mut list = list();
        assert!(matches!(
            list.remove_item(&"0".to_string()),
            Err(SeqError::UnsupportedOperation(_))
        ));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_remove() {
        let mut list = list();
        assert_eq!(list.remove(1).unwrap(), "1");
        assert_eq!(list, strings(&["0", "2", "3", "4"]));
        assert!(matches!(
            list.remove(0),
            Err(SeqError::UnsupportedOperation(_))
        ));
        assert!(matches!(
            list.remove(4),
            Err(SeqError::IndexOutOfBounds { index: 4, len: 4 })
        ));
    }

    #[test]
    fn test_set() {
        let mut list = list();
        assert_eq!(list.set(0, "A".to_string()).unwrap(), "0");
        assert_eq!(list, strings(&["A", "1", "2", "3", "4"]));
        assert_eq!(list.set(1, "B".to_string()).unwrap(), "1");
        assert_eq!(list, strings(&["A", "B", "2", "3", "4"]));
        assert!(matches!(
            list.set(5, "C".to_string()),
            Err(SeqError::IndexOutOfBounds { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_clear_unsupported() {
        let mut list = list();
        assert!(matches!(
            list.clear(),
            Err(SeqError::UnsupportedOperation("clear"))
        ));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_retain() {
        let mut list = Prefixed::new(0, vec![1, 2, 3, 4]);
        list.retain(|item| item % 2 == 0).unwrap();
        assert_eq!(list, vec![0, 2, 4]);

        assert!(matches!(
            list.retain(|item| *item > 0),
            Err(SeqError::UnsupportedOperation(_))
        ));
        assert_eq!(list, vec![0, 2, 4]);
    }

    #[test]
    fn test_read_only_tail() {
        let tail = vec![1, 2];
        let mut list = Prefixed::new(0, &tail);
        assert_eq!(list.set(0, 5).unwrap(), 0);
        assert!(matches!(
            list.set(1, 5),
            Err(SeqError::UnsupportedOperation("set"))
        ));
        assert!(list.push(3).is_err());
        assert_eq!(list, vec![5, 1, 2]);
    }

    #[test]
    fn test_iteration_order() {
        let list = list();
        let collected: Vec<String> = (&list).into_iter().collect();
        assert_eq!(collected, strings(&["0", "1", "2", "3", "4"]));

        let mut from_splitter = Vec::new();
        list.splitter().for_each_remaining(|item| from_splitter.push(item));
        assert_eq!(from_splitter, collected);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(list().to_string(), "[0, 1, 2, 3, 4]");
    }

    #[test]
    fn test_equals() {
        let list = list();
        let expected = strings(&["0", "1", "2", "3", "4"]);
        assert_eq!(list, expected);
        assert_eq!(expected, list);
        assert_ne!(list, strings(&["0", "1", "2", "3"]));
    }

    #[test]
    fn test_hash() {
        let list = list();
        let expected = strings(&["0", "1", "2", "3", "4"]);

        let mut left = DefaultHasher::new();
        list.hash(&mut left);
        let mut right = DefaultHasher::new();
        expected.hash(&mut right);
        assert_eq!(left.finish(), right.finish());
    }

    #[test]
    fn test_sub_sequence() {
        let list = list();
        assert_eq!(list.sub_sequence(1..4).unwrap(), strings(&["1", "2", "3"]));
        assert!(list.sub_sequence(0..0).unwrap().is_empty());
        assert_eq!(list.sub_sequence(0..1).unwrap(), strings(&["0"]));
        assert_eq!(list.sub_sequence(0..2).unwrap(), strings(&["0", "1"]));
        assert_eq!(
            list.sub_sequence(1..5).unwrap(),
            strings(&["1", "2", "3", "4"])
        );
        assert_eq!(
            list.sub_sequence(..).unwrap(),
            strings(&["0", "1", "2", "3", "4"])
        );
        assert!(list.sub_sequence(0..6).is_err());
    }

    #[test]
    fn test_sub_sequence_writes_through() {
        let mut list = list();
        list.sub_sequence_mut(1..5)
            .unwrap()
            .set(0, "X".to_string())
            .unwrap();
        assert_eq!(list, strings(&["0", "X", "2", "3", "4"]));

        list.sub_sequence_mut(0..2)
            .unwrap()
            .set(0, "H".to_string())
            .unwrap();
        assert_eq!(list.head(), "H");
    }

    #[test]
    fn test_sub_sequence_remove_from_tail() {
        let mut list = list();
        assert_eq!(
            list.sub_sequence_mut(1..5).unwrap().remove(3).unwrap(),
            "4"
        );
        assert_eq!(list, strings(&["0", "1", "2", "3"]));
    }

    #[test]
    fn test_search() {
        let list = list();
        assert!(list.contains(&"0".to_string()));
        assert!(!list.contains(&"5".to_string()));
        assert_eq!(list.index_of(&"0".to_string()), Some(0));
        assert_eq!(list.index_of(&"4".to_string()), Some(4));
        assert_eq!(list.index_of(&"6".to_string()), None);
    }

    #[test]
    fn test_last_index_of() {
        assert_eq!(
            Prefixed::new("0", vec!["0", "1", "1", "1"]).last_index_of(&"1"),
            Some(4)
        );
        assert_eq!(
            Prefixed::new("0", vec!["0", "1", "1", "1"]).last_index_of(&"2"),
            None
        );
        assert_eq!(
            Prefixed::new("0", vec!["1", "1", "1", "1"]).last_index_of(&"0"),
            Some(0)
        );
    }

    #[test]
    fn test_cursor() {
        let list = list();
        let mut cursor = list.cursor();

        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.advance().unwrap(), "0");
        assert_eq!(cursor.previous_index(), Some(0));
        assert_eq!(cursor.advance().unwrap(), "1");
        assert_eq!(cursor.next_index(), 2);
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.advance().unwrap(), "4");
        assert!(!cursor.has_next());
        assert!(matches!(cursor.advance(), Err(SeqError::NoSuchElement)));
        assert_eq!(cursor.retreat().unwrap(), "4");
    }

    #[test]
    fn test_cursor_at() {
        let list = list();
        let mut cursor = list.cursor_at(1).unwrap();
        assert!(cursor.has_previous());
        assert_eq!(cursor.previous_index(), Some(0));
        assert_eq!(cursor.advance().unwrap(), "1");
        assert_eq!(cursor.advance().unwrap(), "2");
        assert_eq!(cursor.previous_index(), Some(2));
        assert_eq!(cursor.next_index(), 3);
    }

    #[test]
    fn test_cursor_mut_replaces_head() {
        let mut list = list();
        {
            let mut cursor = list.cursor_mut();
            assert!(matches!(
                cursor.set("x".to_string()),
                Err(SeqError::InvalidState(_))
            ));
            cursor.advance().unwrap();
            cursor.set("A".to_string()).unwrap();
            cursor.advance().unwrap();
            cursor.set("B".to_string()).unwrap();
        }
        assert_eq!(list, strings(&["A", "B", "2", "3", "4"]));
    }

    #[test]
    fn test_fill_array() {
        let list = list();
        let filled = list.fill_array(vec![Some("6".to_string()); 7]);
        assert_eq!(filled[4], Some("4".to_string()));
        assert_eq!(filled[5], None);
        assert_eq!(filled[6], Some("6".to_string()));

        let exact = list.fill_array(vec![None; 5]);
        assert_eq!(exact.len(), 5);
        assert_eq!(exact[0], Some("0".to_string()));
    }

    #[test]
    fn test_nested() {
        let inner = Prefixed::new(1, vec![2, 3]);
        let outer = Prefixed::new(0, inner);
        assert_eq!(outer, vec![0, 1, 2, 3]);
        assert_eq!(outer.index_of(&2), Some(2));
    }
}
