//! Breeds offered for manual selection when the classifier is unsure.

/// Breeds listed on the manual selection screen.
pub const MANUAL_BREEDS: [&str; 9] = [
    "Murrah",
    "Gir",
    "Sahiwal",
    "Red Sindhi",
    "Jaffarabadi",
    "Nili-Ravi",
    "Surti",
    "Mehsana",
    "Banni",
];

/// Case-insensitive substring search over [`MANUAL_BREEDS`].
///
/// An empty query returns the full list in display order.
pub fn search_breeds(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    MANUAL_BREEDS
        .iter()
        .copied()
        .filter(|breed| breed.to_lowercase().contains(&needle))
        .collect()
}

/// Whether `breed` is one of the selectable breeds (case-insensitive).
pub fn is_known_breed(breed: &str) -> bool {
    MANUAL_BREEDS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(breed.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(search_breeds("").len(), MANUAL_BREEDS.len());
        assert_eq!(search_breeds("  ")[0], "Murrah");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(search_breeds("SIN"), vec!["Red Sindhi"]);
        assert_eq!(search_breeds("ra"), vec!["Murrah", "Jaffarabadi", "Nili-Ravi"]);
    }

    #[test]
    fn test_no_match() {
        assert!(search_breeds("holstein").is_empty());
        assert!(!is_known_breed("Holstein"));
        assert!(is_known_breed("gir"));
    }
}
