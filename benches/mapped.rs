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

use criterion::{Criterion, black_box};
use seqviews::{FnTransform, Mapped, Sequence, Splitter};

fn backing() -> Vec<u64> {
    (0..10_000).collect()
}

pub fn bench_indexed_reads(c: &mut Criterion) {
    let values = backing();
    let view = Mapped::new(FnTransform::new(|x: u64| x.wrapping_mul(31)), &values);
    c.bench_function("mapped get 10000 strided indices", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for i in 0..10_000 {
                let index = (i * 7) % 10_000;
                total = total.wrapping_add(view.get(black_box(index)).unwrap_or(0));
            }
            total
        });
    });
}

pub fn bench_iteration(c: &mut Criterion) {
    let values = backing();
    let view = Mapped::new(FnTransform::new(|x: u64| x.wrapping_mul(31)), &values);
    c.bench_function("mapped cursor iteration", |b| {
        b.iter(|| view.iter().fold(0u64, u64::wrapping_add));
    });
}

pub fn bench_split_drain(c: &mut Criterion) {
    let values = backing();
    let view = Mapped::new(FnTransform::new(|x: u64| x.wrapping_mul(31)), &values);
    c.bench_function("mapped split into halves and drain", |b| {
        b.iter(|| {
            let mut suffix = view.splitter();
            let prefix = suffix.try_split();
            let mut total = 0u64;
            if let Some(mut prefix) = prefix {
                prefix.for_each_remaining(|x| total = total.wrapping_add(x));
            }
            suffix.for_each_remaining(|x| total = total.wrapping_add(x));
            black_box(total)
        });
    });
}
