//! Top-N selection by a numeric key.

use std::cmp::Ordering;

/// The `n` rows with the largest `key`, largest first.
///
/// The sort is stable, so rows with equal keys keep their input order. Asking for more rows than
/// the table holds returns every row.
pub fn top_n<'a, T, F>(rows: &'a [T], n: usize, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> f64,
{
    let mut keyed: Vec<(f64, &'a T)> = rows.iter().map(|row| (key(row), row)).collect();
    keyed.sort_by(|a, b| descending(a.0, b.0));
    keyed.into_iter().take(n).map(|(_, row)| row).collect()
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
