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

//! Rayon integration: any [`Splitter`] drives a parallel iterator.

use rayon::iter::ParallelIterator;
use rayon::iter::plumbing::{Folder, UnindexedConsumer, UnindexedProducer, bridge_unindexed};

use crate::splitter::Splitter;

/// A rayon [`ParallelIterator`] that hands work to threads by calling
/// [`Splitter::try_split`].
///
/// Elements keep their encounter order, so order-sensitive adapters such as `collect` reproduce
/// the sequence.
///
/// # Examples
///
/// ```rust
/// use rayon::iter::ParallelIterator;
/// use seqviews::{Repeating, Sequence};
///
/// let view = Repeating::new(2u64, 1000).unwrap();
/// assert_eq!(view.par_elements().sum::<u64>(), 2000);
/// ```
#[derive(Debug, Clone)]
pub struct ParSplitter<S> {
    splitter: S,
}

impl<S> ParSplitter<S> {
    /// Wraps a splitter.
    pub fn new(splitter: S) -> Self {
        Self { splitter }
    }
}

impl<S> ParallelIterator for ParSplitter<S>
where
    S: Splitter + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(SplitterProducer(self.splitter), consumer)
    }
}

struct SplitterProducer<S>(S);

impl<S> UnindexedProducer for SplitterProducer<S>
where
    S: Splitter + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn split(mut self) -> (Self, Option<Self>) {
        match self.0.try_split() {
            Some(prefix) => (SplitterProducer(prefix), Some(self)),
            None => (self, None),
        }
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self.0.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefixed::Prefixed;
    use crate::repeating::Repeating;
    use crate::sequence::Sequence;

    #[test]
    fn test_collect_preserves_order() {
        let values: Vec<u32> = (0..10_000).collect();
        let collected: Vec<u32> = values.par_elements().collect();
        assert_eq!(collected, values);
    }

    #[test]
    fn test_repeating_count() {
        let view = Repeating::new('x', 4097).unwrap();
        assert_eq!(view.par_elements().count(), 4097);
    }

    #[test]
    fn test_prefixed_sum() {
        let view = Prefixed::new(1u64, (2..=100).collect::<Vec<u64>>());
        assert_eq!(view.par_elements().sum::<u64>(), 5050);
    }
}
