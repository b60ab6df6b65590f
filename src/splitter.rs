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

//! Splittable traversal of sequences for parallel decomposition.

use bitflags::bitflags;

use crate::sequence::Sequence;

bitflags! {
    /// Structural properties a [`Splitter`] reports about the elements it traverses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Characteristics: u32 {
        /// Elements are produced in a defined encounter order.
        const ORDERED = 0x0000_0010;
        /// No two produced elements are equal.
        const DISTINCT = 0x0000_0001;
        /// Elements are produced in sorted order.
        const SORTED = 0x0000_0004;
        /// `estimate_size` is the exact number of remaining elements.
        const SIZED = 0x0000_0040;
        /// No produced element represents an absent value.
        const NONNULL = 0x0000_0100;
        /// The source cannot be structurally modified during traversal.
        const IMMUTABLE = 0x0000_0400;
        /// The source may be modified concurrently without external synchronization.
        const CONCURRENT = 0x0000_1000;
        /// Every splitter produced by `try_split` is itself `SIZED`.
        const SUBSIZED = 0x0000_4000;
    }
}

/// A traversal cursor that can hand off part of its remaining elements.
///
/// Splitting partitions the remaining elements: the returned splitter covers a prefix and the
/// receiver keeps the suffix, so consuming the prefix and then the receiver reproduces the
/// original order.
///
/// # Examples
///
/// ```rust
/// use seqviews::{Repeating, Sequence, Splitter};
///
/// let view = Repeating::new(7, 6).unwrap();
/// let mut suffix = view.splitter();
/// let prefix = suffix.try_split().unwrap();
///
/// assert_eq!(prefix.exact_size(), Some(3));
/// assert_eq!(suffix.exact_size(), Some(3));
/// ```
pub trait Splitter: Sized {
    /// The type of elements yielded by the splitter.
    type Item;

    /// Yields the next element, or `None` once the splitter is exhausted.
    fn try_advance(&mut self) -> Option<Self::Item>;

    /// Splits off a prefix of the remaining elements, or returns `None` if it cannot split.
    fn try_split(&mut self) -> Option<Self>;

    /// An estimate of the remaining element count; exact when [`Characteristics::SIZED`] is set.
    fn estimate_size(&self) -> usize;

    /// The characteristics of this splitter and its elements.
    fn characteristics(&self) -> Characteristics;

    /// The exact remaining element count, if this splitter is [`Characteristics::SIZED`].
    fn exact_size(&self) -> Option<usize> {
        if self.characteristics().contains(Characteristics::SIZED) {
            Some(self.estimate_size())
        } else {
            None
        }
    }

    /// Feeds every remaining element to `action`.
    fn for_each_remaining<G>(&mut self, mut action: G)
    where
        G: FnMut(Self::Item),
    {
        while let Some(item) = self.try_advance() {
            action(item);
        }
    }

    /// Turns the splitter into an [`Iterator`] over its remaining elements.
    fn items(self) -> SplitIter<Self> {
        SplitIter { splitter: self }
    }
}

/// An [`Iterator`] over the remaining elements of a [`Splitter`].
#[derive(Debug, Clone)]
pub struct SplitIter<S> {
    splitter: S,
}

impl<S: Splitter> Iterator for SplitIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.splitter.try_advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.splitter.exact_size() {
            Some(exact) => (exact, Some(exact)),
            None => (0, None),
        }
    }
}

/// A splitter over any [`Sequence`] that halves its remaining index range on each split.
#[derive(Debug)]
pub struct IndexSplitter<'a, S: ?Sized> {
    sequence: &'a S,
    start: usize,
    end: usize,
    characteristics: Characteristics,
}

impl<'a, S: Sequence + ?Sized> IndexSplitter<'a, S> {
    /// Creates an `ORDERED | SIZED | SUBSIZED` splitter over the whole sequence.
    pub fn new(sequence: &'a S) -> Self {
        Self::with_characteristics(
            sequence,
            Characteristics::ORDERED | Characteristics::SIZED | Characteristics::SUBSIZED,
        )
    }

    /// Creates a splitter over the whole sequence reporting the given characteristics.
    pub fn with_characteristics(sequence: &'a S, characteristics: Characteristics) -> Self {
        Self {
            sequence,
            start: 0,
            end: sequence.len(),
            characteristics,
        }
    }
}

impl<S: ?Sized> Clone for IndexSplitter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            start: self.start,
            end: self.end,
            characteristics: self.characteristics,
        }
    }
}

impl<S: Sequence + ?Sized> Splitter for IndexSplitter<'_, S> {
    type Item = S::Item;

    fn try_advance(&mut self) -> Option<Self::Item> {
        if self.start >= self.end {
            return None;
        }
        let item = self.sequence.get(self.start).ok()?;
        self.start += 1;
        Some(item)
    }

    fn try_split(&mut self) -> Option<Self> {
        let mid = self.start + (self.end - self.start) / 2;
        if mid <= self.start {
            return None;
        }
        log::trace!("splitting index range {}..{} at {}", self.start, self.end, mid);
        let prefix = Self {
            sequence: self.sequence,
            start: self.start,
            end: mid,
            characteristics: self.characteristics,
        };
        self.start = mid;
        Some(prefix)
    }

    fn estimate_size(&self) -> usize {
        self.end - self.start
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}
