//! Column totals.

/// Sum an integer column across all rows.
pub fn sum_by<T, F>(rows: &[T], key: F) -> u64
where
    F: Fn(&T) -> u32,
{
    rows.iter().map(|row| u64::from(key(row))).sum()
}
