//! Nesting of preceding-unit runs across successive equations.

/// Removes `needle` from `haystack` as an order-preserving subsequence.
///
/// Each needle element consumes the first matching haystack element after
/// the previous match. Returns the unmatched haystack elements in their
/// original order, or `None` if some needle element cannot be matched.
///
/// ```
/// use hemerai_collate::remove_subsequence;
///
/// assert_eq!(remove_subsequence(&[30, 30, 29, 29], &[30, 29]), Some(vec![30, 29]));
/// assert_eq!(remove_subsequence(&[30, 29], &[29, 29]), None);
/// ```
pub fn remove_subsequence(haystack: &[u16], needle: &[u16]) -> Option<Vec<u16>> {
    let mut matched = vec![false; haystack.len()];
    let mut cursor = 0;
    for &want in needle {
        let offset = haystack[cursor..].iter().position(|&x| x == want)?;
        matched[cursor + offset] = true;
        cursor += offset + 1;
    }
    Some(
        haystack
            .iter()
            .zip(&matched)
            .filter(|&(_, &m)| !m)
            .map(|(&x, _)| x)
            .collect(),
    )
}

/// Splits a chronological series of preceding runs into the segments each
/// step reveals.
///
/// Every run must contain the previous run as a subsequence. On success
/// returns one segment per run; on failure returns the index of the first
/// run that does not nest.
pub(crate) fn reveal_segments<'a, I>(runs: I) -> Result<Vec<Vec<u16>>, usize>
where
    I: IntoIterator<Item = &'a [u16]>,
{
    let mut segments = Vec::new();
    let mut consumed: &[u16] = &[];
    for (step, run) in runs.into_iter().enumerate() {
        let segment = remove_subsequence(run, consumed).ok_or(step)?;
        segments.push(segment);
        consumed = run;
    }
    Ok(segments)
}
