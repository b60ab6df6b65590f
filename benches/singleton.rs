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
use seqviews::{ListCursor, Singleton};

pub fn bench_cursor_set(c: &mut Criterion) {
    c.bench_function("singleton cursor advance and set", |b| {
        let mut view = Singleton::new(0u64);
        b.iter(|| {
            let mut cursor = view.cursor_mut();
            let current = cursor.advance().unwrap_or(0);
            let _ = cursor.set(black_box(current + 1));
        });
    });
}
