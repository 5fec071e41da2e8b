//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Join items with `", "`, keeping at most `limit` and noting how many were left out
pub fn join_limited<T: std::fmt::Display>(items: &[T], limit: usize) -> String {
    let mut joined = items
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > limit {
        joined.push_str(&format!(" and {} more", items.len() - limit));
    }
    joined
}
