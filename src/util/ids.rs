//! Time-based unique identifiers.

use chrono::{DateTime, Utc};

/// Epoch-millisecond id for `now`, bumped past any id already `taken`.
///
/// Conversation and task ids share this scheme so records stay sortable by
/// creation time.
pub fn time_based_id(now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    time_based_id_from(now.timestamp_millis(), taken)
}

fn time_based_id_from(mut millis: i64, taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = millis.to_string();
        if !taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

/// Issues strictly increasing time-based ids.
///
/// An id handed out once is never issued again by the same sequence, even
/// after the record that carried it is gone and the clock has not moved.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    last: Option<i64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence that continues after every numeric id in `existing`.
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            last: existing.into_iter().filter_map(|id| id.parse().ok()).max(),
        }
    }

    /// Next id at or after `now`, above every id issued so far and not `taken`.
    pub fn next(&mut self, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
        let floor = match self.last {
            Some(last) => now.timestamp_millis().max(last + 1),
            None => now.timestamp_millis(),
        };
        let id = time_based_id_from(floor, taken);
        self.last = id.parse().ok().or(Some(floor));
        id
    }
}
