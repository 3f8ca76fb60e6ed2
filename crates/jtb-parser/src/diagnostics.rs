use std::collections::HashSet;
use std::sync::OnceLock;

static CATEGORIES: OnceLock<HashSet<String>> = OnceLock::new();

fn split_categories(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Enables diagnostics for a comma-separated category list instead of
/// reading `JTB_DIAGNOSTICS`. Returns false when the set was already fixed.
pub fn init_diagnostics(raw: &str) -> bool {
    CATEGORIES.set(split_categories(raw)).is_ok()
}

/// Returns true when `JTB_DIAGNOSTICS` lists `category` (or `all`).
///
/// Categories in use: `mode`, `layout`, `mapper`, `recognize`.
pub fn diagnostics_enabled(category: &str) -> bool {
    let set = CATEGORIES.get_or_init(|| {
        split_categories(&std::env::var("JTB_DIAGNOSTICS").unwrap_or_default())
    });
    set.contains("all") || set.contains(&category.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_trimmed_and_lowercased() {
        let set = split_categories(" Layout, recognize,,MODE ");
        assert_eq!(set.len(), 3);
        assert!(set.contains("layout"));
        assert!(set.contains("mode"));
    }
}
