use std::cmp::Ordering;

use crate::occurrence::Occurrence;

/// Move the last occurrence of `list` into place, keeping the list in
/// descending frequency order.
///
/// Every element but the last must already be sorted. The new element goes
/// in front of the first strictly smaller frequency, so it lands after any
/// existing entries with the same frequency.
///
/// Returns the midpoint indexes probed by the binary search, in order. Lists
/// of length 0 or 1 need no search and return no probes.
pub fn insert_last(list: &mut Vec<Occurrence>) -> Vec<usize> {
    let mut probes = Vec::new();
    if list.len() <= 1 {
        return probes;
    }

    let Some(item) = list.pop() else {
        return probes;
    };
    let target = item.frequency;

    let mut low = 0usize;
    let mut high = list.len() - 1;
    let position = loop {
        let mid = (low + high) / 2;
        probes.push(mid);

        match list[mid].frequency.cmp(&target) {
            Ordering::Equal => break first_below(list, mid, target),
            Ordering::Greater => low = mid + 1,
            Ordering::Less if mid == 0 => break 0,
            Ordering::Less => high = mid - 1,
        }
        if low > high {
            break low;
        }
    };

    list.insert(position, item);
    probes
}

/// Index of the first entry at or after `from` whose frequency is below
/// `target`, or the list length if there is none.
fn first_below(list: &[Occurrence], from: usize, target: u32) -> usize {
    list[from..]
        .iter()
        .position(|occ| occ.frequency < target)
        .map_or(list.len(), |offset| from + offset)
}
