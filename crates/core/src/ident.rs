// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Generates a record id from the current timestamp in milliseconds,
/// bumped past any value the caller reports as taken.
///
/// Ids only need to be unique within one collection; the bump loop makes
/// same-millisecond additions (and clock steps backwards) safe.
pub(crate) fn unique_millis_id<F>(taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let mut candidate: i128 = millis;
    loop {
        let id: String = candidate.to_string();
        if !taken(&id) {
            return id;
        }
        candidate += 1;
    }
}
