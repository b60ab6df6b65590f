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

//! Splitting views across threads.

use std::thread;

use pretty_assertions::assert_eq;
use seqviews::{
    Characteristics, DisplayString, FnTransform, Mapped, Prefixed, Repeating, Sequence, Singleton,
    Splitter,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_views_are_send_and_sync() {
    assert_send_sync::<Repeating<String>>();
    assert_send_sync::<Singleton<i32>>();
    assert_send_sync::<Prefixed<i32, Vec<i32>>>();
    assert_send_sync::<Mapped<Vec<i32>, DisplayString>>();
    assert_send_sync::<Mapped<&Vec<i32>, DisplayString>>();
}

#[test]
fn test_repeating_split_of_six() {
    let view = Repeating::new('z', 6).unwrap();
    let mut pieces = vec![view.splitter()];

    // Keep splitting every piece until none of them splits.
    loop {
        let mut next = Vec::new();
        let mut split_any = false;
        for mut piece in pieces {
            match piece.try_split() {
                Some(prefix) => {
                    split_any = true;
                    next.push(prefix);
                    next.push(piece);
                }
                None => next.push(piece),
            }
        }
        pieces = next;
        if !split_any {
            break;
        }
    }

    let sizes: Vec<usize> = pieces.as_slice().iter().map(Splitter::estimate_size).collect();
    assert_eq!(sizes.as_slice().iter().sum::<usize>(), 6);
    assert!(sizes.into_iter().all(|size| size == 1));

    let joined: Vec<char> = pieces.into_iter().flat_map(Splitter::items).collect();
    assert_eq!(joined, vec!['z'; 6]);
}

#[test]
fn test_scoped_threads_consume_in_order() {
    let values: Vec<u64> = (0..1000).collect();
    let view = Mapped::new(FnTransform::new(|x: u64| x * x), &values);

    // try_split hands back the prefix and leaves the receiver with the suffix.
    let mut upper = view.splitter();
    let mut lower = upper.try_split().unwrap();
    let first = lower.try_split().unwrap();
    let third = upper.try_split().unwrap();
    let parts = [first, lower, third, upper];

    let chunks: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = parts
            .into_iter()
            .map(|part| scope.spawn(move || part.items().collect::<Vec<u64>>()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(chunks.as_slice().iter().map(Vec::len).sum::<usize>(), 1000);
    let joined: Vec<u64> = chunks.into_iter().flatten().collect();
    assert_eq!(joined, view.to_vec());
}

#[test]
fn test_shared_repeating_read_from_threads() {
    let view = Repeating::new("shared".to_string(), 64).unwrap();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(view.len(), 64);
                assert_eq!(view.iter().filter(|item| item == "shared").count(), 64);
            });
        }
    });
}

#[test]
fn test_mapped_keeps_backing_characteristics() {
    let view = Repeating::new(1u8, 8).unwrap();
    let mapped = Mapped::new(FnTransform::new(|x: u8| u16::from(x)), &view);
    let characteristics = mapped.splitter().characteristics();
    assert!(characteristics.contains(Characteristics::IMMUTABLE | Characteristics::SUBSIZED));
    assert_eq!(characteristics, view.splitter().characteristics());
}

#[cfg(feature = "rayon")]
mod parallel {
    use pretty_assertions::assert_eq;
    use rayon::iter::ParallelIterator;
    use seqviews::{FnTransform, Mapped, Repeating, Sequence, Singleton};

    #[test]
    fn test_par_collect_preserves_order() {
        let values: Vec<u32> = (0..5000).collect();
        let view = Mapped::new(FnTransform::new(|x: u32| x + 1), &values);
        let collected: Vec<u32> = view.par_elements().collect();
        assert_eq!(collected, (1..=5000).collect::<Vec<u32>>());
    }

    #[test]
    fn test_par_repeating_count() {
        let view = Repeating::new(3u64, 10_000).unwrap();
        assert_eq!(view.par_elements().sum::<u64>(), 30_000);
    }

    #[test]
    fn test_par_singleton() {
        let view = Singleton::new(5);
        assert_eq!(view.par_elements().collect::<Vec<_>>(), vec![5]);
    }
}
