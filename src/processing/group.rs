//! Group-and-count by a categorical key.

use std::collections::HashMap;

/// Count rows per key, most frequent first.
///
/// Rows whose key is `None` or blank are not counted. Keys with equal counts are ordered by
/// first appearance.
pub fn value_counts<'a, T, F>(rows: &'a [T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut order: Vec<(&'a str, usize)> = Vec::new();
    let mut slot: HashMap<&'a str, usize> = HashMap::new();

    for row in rows {
        let Some(k) = key(row).filter(|k| !k.trim().is_empty()) else {
            continue;
        };
        match slot.get(k) {
            Some(&i) => order[i].1 += 1,
            None => {
                slot.insert(k, order.len());
                order.push((k, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().map(|(k, n)| (k.to_owned(), n)).collect()
}

#[cfg(test)]
mod tests {
    use super::value_counts;

    #[test]
    fn counts_are_descending_with_first_seen_ties() {
        let winners = ["England", "India", "South Africa", "India", "England", "", "Australia"];
        let counts = value_counts(&winners, |w| Some(*w));
        assert_eq!(
            counts,
            vec![
                ("England".to_string(), 2),
                ("India".to_string(), 2),
                ("South Africa".to_string(), 1),
                ("Australia".to_string(), 1),
            ]
        );
    }

    #[test]
    fn none_keys_are_skipped() {
        let rows = [Some("A"), None, Some("A")];
        assert_eq!(value_counts(&rows, |r| *r), vec![("A".to_string(), 2)]);
    }
}
