use crate::*;
use itertools::Itertools;

/// Rank `candidates` against the partial word, capped at the configured
/// result limit.
///
/// Case-insensitive prefix matches come first, shortest first. Then
/// subsequence matches (every character of `partial` in order, not
/// necessarily adjacent), by position of the first matched character and then
/// length. Equal scores keep input order. An empty `partial` keeps every
/// candidate in input order.
pub fn rank<S: AsRef<str>>(partial: &str, candidates: impl IntoIterator<Item = S>) -> Vec<String> {
    rank_with_limit(partial, candidates, config().result_cap())
}

/// [`rank`] with an explicit cap, itself never above [`MAX_RESULTS`].
pub fn rank_with_limit<S: AsRef<str>>(
    partial: &str,
    candidates: impl IntoIterator<Item = S>,
    limit: usize,
) -> Vec<String> {
    let limit = limit.min(MAX_RESULTS);
    if partial.is_empty() {
        return candidates
            .into_iter()
            .take(limit)
            .map(|c| c.as_ref().to_string())
            .collect();
    }

    let needle = partial.to_lowercase();
    candidates
        .into_iter()
        .filter_map(|c| {
            let c = c.as_ref();
            score(&needle, c).map(|s| (s, c.to_string()))
        })
        .sorted_by_key(|(s, _)| *s)
        .take(limit)
        .map(|(_, c)| c)
        .collect()
}

/// (tier, first match position, length); lower is better.
fn score(needle: &str, candidate: &str) -> Option<(u8, usize, usize)> {
    let hay = candidate.to_lowercase();
    let len = candidate.chars().count();
    if hay.starts_with(needle) {
        return Some((0, 0, len));
    }
    subsequence_start(needle, &hay).map(|pos| (1, pos, len))
}

fn subsequence_start(needle: &str, hay: &str) -> Option<usize> {
    let mut hay = hay.chars().enumerate();
    let mut first = None;
    for n in needle.chars() {
        let (pos, _) = hay.find(|(_, h)| *h == n)?;
        first.get_or_insert(pos);
    }
    first
}
