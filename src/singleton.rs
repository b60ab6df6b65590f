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

//! A mutable one-element sequence.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::RangeBounds;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cursor::{Iter, ListCursor};
use crate::result::{SeqError, SeqResult, check_index, check_position};
use crate::sequence::{Sequence, SequenceMut};
use crate::splitter::{Characteristics, Splitter};
use crate::subseq::SubSequence;

/// Rendered in place of a singleton that is already being rendered further up the stack.
const SELF_PLACEHOLDER: &str = "(this Collection)";

/// Identifies a singleton being rendered. A nested singleton shares its parent's address, so
/// the type is part of the key.
type RenderKey = (usize, &'static str);

thread_local! {
    static RENDERING: RefCell<Vec<RenderKey>> = const { RefCell::new(Vec::new()) };
}

/// A sequence of exactly one element that can be replaced in place.
///
/// `set(0, value)` and the `set` of a mutable cursor both write the one slot; every other
/// mutation is rejected. A window over `0..1` aliases the slot, so writes through the window are
/// visible here.
///
/// # Examples
///
/// ```rust
/// use seqviews::{Sequence, SequenceMut, Singleton};
///
/// let mut single = Singleton::new("a");
/// assert_eq!(single.len(), 1);
/// assert_eq!(single.set(0, "b").unwrap(), "a");
/// assert_eq!(single.get(0).unwrap(), "b");
/// assert!(single.set(1, "c").is_err());
/// assert_eq!(single.to_string(), "[b]");
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Singleton<T> {
    value: T,
}

impl<T> Singleton<T> {
    /// Creates a singleton holding `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the element.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the element mutably.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwraps the element.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Renders `[value]`, or the placeholder if this singleton is already being rendered on the
    /// current thread, which happens when the value leads back to this singleton.
    fn render(
        &self,
        f: &mut fmt::Formatter<'_>,
        value: impl FnOnce(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        let key = (std::ptr::from_ref(self).addr(), std::any::type_name::<Self>());
        let Some(_guard) = RenderGuard::enter(key) else {
            return f.write_str(SELF_PLACEHOLDER);
        };
        f.write_str("[")?;
        value(&self.value, f)?;
        f.write_str("]")
    }
}

impl<T: Clone> Singleton<T> {
    /// Returns a window over `range`, which must lie within `0..=1`.
    ///
    /// `0..0` is empty; `0..1` reads the slot itself.
    pub fn sub_sequence<R>(&self, range: R) -> SeqResult<SubSequence<&Self>>
    where
        R: RangeBounds<usize>,
    {
        SubSequence::new(self, range)
    }

    /// Returns a window over `range` that writes through to the slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqviews::{SequenceMut, Singleton};
    ///
    /// let mut single = Singleton::new(1);
    /// single.sub_sequence_mut(0..1).unwrap().set(0, 2).unwrap();
    /// assert_eq!(*single.value(), 2);
    /// ```
    pub fn sub_sequence_mut<R>(&mut self, range: R) -> SeqResult<SubSequence<&mut Self>>
    where
        R: RangeBounds<usize>,
    {
        SubSequence::new(self, range)
    }

    /// Returns a cursor in front of the element that can replace it once it has been passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqviews::{ListCursor, Singleton};
    ///
    /// let mut single = Singleton::new("a");
    /// let mut cursor = single.cursor_mut();
    /// assert!(cursor.set("b").is_err());
    /// cursor.advance().unwrap();
    /// cursor.set("b").unwrap();
    /// assert_eq!(*single.value(), "b");
    /// ```
    pub fn cursor_mut(&mut self) -> SingletonCursorMut<'_, T> {
        SingletonCursorMut {
            owner: self,
            before: true,
        }
    }

    /// Returns a mutable cursor in front of position `index`, which must be 0 or 1.
    pub fn cursor_mut_at(&mut self, index: usize) -> SeqResult<SingletonCursorMut<'_, T>> {
        check_position(index, 1)?;
        Ok(SingletonCursorMut {
            owner: self,
            before: index == 0,
        })
    }
}

impl<T: Clone> Sequence for Singleton<T> {
    type Item = T;
    type Cursor<'a>
        = SingletonCursor<'a, T>
    where
        Self: 'a;
    type Splitter<'a>
        = SingletonSplitter<'a, T>
    where
        Self: 'a;

    fn len(&self) -> usize {
        1
    }

    fn is_empty(&self) -> bool {
        false
    }

    fn get(&self, index: usize) -> SeqResult<T> {
        check_index(index, 1)?;
        Ok(self.value.clone())
    }

    fn cursor(&self) -> Self::Cursor<'_> {
        SingletonCursor {
            value: &self.value,
            before: true,
        }
    }

    fn cursor_at(&self, index: usize) -> SeqResult<Self::Cursor<'_>> {
        check_position(index, 1)?;
        Ok(SingletonCursor {
            value: &self.value,
            before: index == 0,
        })
    }

    fn splitter(&self) -> Self::Splitter<'_> {
        SingletonSplitter {
            value: &self.value,
            pending: true,
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
        self.index_of(value)
    }

    fn to_vec(&self) -> Vec<T> {
        vec![self.value.clone()]
    }
}

impl<T: Clone> SequenceMut for Singleton<T> {
    fn set(&mut self, index: usize, value: T) -> SeqResult<T> {
        check_index(index, 1)?;
        Ok(mem::replace(&mut self.value, value))
    }
}

impl<T, R> PartialEq<R> for Singleton<T>
where
    T: Clone + PartialEq,
    R: Sequence<Item = T>,
{
    fn eq(&self, other: &R) -> bool {
        other.len() == 1 && other.get(0).is_ok_and(|item| item == self.value)
    }
}

impl<T: Clone + Eq> Eq for Singleton<T> {}

impl<T: Clone + PartialEq> PartialEq<Singleton<T>> for Vec<T> {
    fn eq(&self, other: &Singleton<T>) -> bool {
        other == self
    }
}

impl<T: Hash> Hash for Singleton<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(1);
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |value, f| fmt::Debug::fmt(value, f))
    }
}

impl<T: fmt::Display> fmt::Display for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |value, f| fmt::Display::fmt(value, f))
    }
}

impl<'a, T: Clone> IntoIterator for &'a Singleton<T> {
    type Item = T;
    type IntoIter = Iter<SingletonCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Marks a singleton as being rendered on this thread until dropped.
struct RenderGuard {
    key: RenderKey,
}

impl RenderGuard {
    fn enter(key: RenderKey) -> Option<Self> {
        RENDERING.with(|rendering| {
            let mut rendering = rendering.borrow_mut();
            if rendering.contains(&key) {
                None
            } else {
                rendering.push(key);
                Some(Self { key })
            }
        })
    }
}

impl Drop for RenderGuard {
    fn drop(&mut self) {
        RENDERING.with(|rendering| {
            rendering.borrow_mut().retain(|key| *key != self.key);
        });
    }
}

/// A read-only cursor over a [`Singleton`], either before or after its element.
#[derive(Debug)]
pub struct SingletonCursor<'a, T> {
    value: &'a T,
    before: bool,
}

impl<T> Clone for SingletonCursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            before: self.before,
        }
    }
}

impl<T: Clone> ListCursor for SingletonCursor<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.before
    }

    fn has_previous(&self) -> bool {
        !self.before
    }

    fn next_index(&self) -> usize {
        usize::from(!self.before)
    }

    fn advance(&mut self) -> SeqResult<T> {
        if !self.before {
            return Err(SeqError::NoSuchElement);
        }
        self.before = false;
        Ok(self.value.clone())
    }

    fn retreat(&mut self) -> SeqResult<T> {
        if self.before {
            return Err(SeqError::NoSuchElement);
        }
        self.before = true;
        Ok(self.value.clone())
    }
}

/// A cursor holding exclusive access to a [`Singleton`], able to replace its element.
///
/// `set` is only allowed while the cursor is after the element.
#[derive(Debug)]
pub struct SingletonCursorMut<'a, T> {
    owner: &'a mut Singleton<T>,
    before: bool,
}

impl<T: Clone> ListCursor for SingletonCursorMut<'_, T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.before
    }

    fn has_previous(&self) -> bool {
        !self.before
    }

    fn next_index(&self) -> usize {
        usize::from(!self.before)
    }

    fn advance(&mut self) -> SeqResult<T> {
        if !self.before {
            return Err(SeqError::NoSuchElement);
        }
        self.before = false;
        Ok(self.owner.value.clone())
    }

    fn retreat(&mut self) -> SeqResult<T> {
        if self.before {
            return Err(SeqError::NoSuchElement);
        }
        self.before = true;
        Ok(self.owner.value.clone())
    }

    fn set(&mut self, value: T) -> SeqResult<()> {
        if self.before {
            return Err(SeqError::InvalidState(
                "the element has not been passed by the cursor",
            ));
        }
        self.owner.value = value;
        Ok(())
    }
}

/// A splitter over the one element of a [`Singleton`]; it never splits.
#[derive(Debug)]
pub struct SingletonSplitter<'a, T> {
    value: &'a T,
    pending: bool,
}

impl<T: Clone> Splitter for SingletonSplitter<'_, T> {
    type Item = T;

    fn try_advance(&mut self) -> Option<T> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        Some(self.value.clone())
    }

    fn try_split(&mut self) -> Option<Self> {
        None
    }

    fn estimate_size(&self) -> usize {
        usize::from(self.pending)
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::ORDERED
            | Characteristics::DISTINCT
            | Characteristics::SIZED
            | Characteristics::SUBSIZED
    }
}
