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

use criterion::{criterion_group, criterion_main};

mod mapped;
mod singleton;

criterion_group!(
    mapped,
    mapped::bench_indexed_reads,
    mapped::bench_iteration,
    mapped::bench_split_drain
);
criterion_group!(
    prefixed,
    prefixed::bench_indexed_reads,
    prefixed::bench_appends
);
criterion_group!(
    repeating,
    repeating::bench_construction,
    repeating::bench_ordered_hash,
    repeating::bench_split_drain
);
criterion_group!(singleton, singleton::bench_cursor_set);
criterion_main!(mapped, prefixed, repeating, singleton);
