//! Row filtering over normalized tables.

/// Returns the rows for which `predicate` returns `true`, in input order.
///
/// Rows are borrowed; the table itself is never modified.
pub fn filter<'a, T, F>(rows: &'a [T], mut predicate: F) -> Vec<&'a T>
where
    F: FnMut(&T) -> bool,
{
    rows.iter().filter(|row| predicate(row)).collect()
}
