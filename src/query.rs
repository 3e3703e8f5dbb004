use crate::occurrence::Occurrence;

/// Result cap for a standard two-keyword search.
pub const TOP_RESULTS: usize = 5;

/// Merge two ranked occurrence lists into at most `limit` distinct documents.
///
/// Both lists must be in descending frequency order. The higher head wins;
/// on equal frequency `first` wins. A document already taken is passed over
/// without using up a result slot.
pub fn merge_top(
    first: &[Occurrence],
    second: &[Occurrence],
    limit: usize,
) -> Vec<String> {
    let mut results: Vec<String> = Vec::with_capacity(limit.min(8));
    let (mut i, mut j) = (0, 0);

    while results.len() < limit {
        let next = match (first.get(i), second.get(j)) {
            (None, None) => break,
            (Some(a), Some(b)) if a.frequency >= b.frequency => {
                i += 1;
                a
            }
            (Some(a), None) => {
                i += 1;
                a
            }
            (_, Some(b)) => {
                j += 1;
                b
            }
        };

        if !results.iter().any(|doc| *doc == next.document) {
            results.push(next.document.clone());
        }
    }

    results
}
