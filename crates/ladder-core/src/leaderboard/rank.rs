//! Deduplicate by best time, then order.

use super::record::Record;
use std::collections::HashMap;

/// Keep each normalized name's fastest record.
///
/// A later record replaces the stored one only when strictly faster, so ties keep
/// the first-seen row. The winner stays in the slot where its name first appeared.
pub fn best_per_name(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut best: Vec<Record> = Vec::new();
    for record in records {
        match slots.get(&record.key) {
            Some(&i) => {
                if record.seconds < best[i].seconds {
                    best[i] = record;
                }
            }
            None => {
                slots.insert(record.key.clone(), best.len());
                best.push(record);
            }
        }
    }
    best
}

/// Stable ascending sort by seconds.
pub fn sort_by_time(records: &mut [Record]) {
    records.sort_by_key(|r| r.seconds);
}
