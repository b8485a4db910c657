use std::collections::HashSet;

/// Keeps the first occurrence of every name, in encounter order.
/// Comparison is exact: "Tomato" and "tomato" are distinct.
pub fn unique_preserving_order<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for name in names {
        if seen.insert(name.as_str()) {
            unique.push(name.clone());
        }
    }

    unique
}
