//! Splitting an SSK `doc_name` into a USK `(doc_name, edition)` pair
//! and back. The source matches `^(.*)-(-?\d+)$` with a greedy
//! prefix, which — because `.*` backtracks from consuming everything
//! down to nothing — is equivalent to finding the *rightmost* `-`
//! whose suffix parses as a signed integer.

/// Split `"site-42"` into `("site", 42)`. Returns `None` if no
/// trailing `-<int>` suffix exists.
pub fn split(doc_name: &str) -> Option<(String, i64)> {
    for (i, ch) in doc_name.char_indices().rev() {
        if ch == '-' {
            let suffix = &doc_name[i + ch.len_utf8()..];
            if let Ok(edition) = suffix.parse::<i64>() {
                return Some((doc_name[..i].to_string(), edition));
            }
        }
    }
    None
}

/// Join `(doc_name, edition)` back into an SSK `doc_name`, using the
/// absolute value of `edition` — this direction is intentionally
/// lossy on sign, matching the source's actual behaviour for
/// negative ("guessed") editions.
pub fn join(doc_name: &str, edition: i64) -> String {
    let abs_edition = if edition == i64::MIN {
        i64::MAX
    } else {
        edition.abs()
    };
    format!("{doc_name}-{abs_edition}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple() {
        assert_eq!(split("site-42"), Some(("site".to_string(), 42)));
    }

    #[test]
    fn test_split_negative_edition() {
        // Rightmost dash wins: "site--7" splits into prefix "site-"
        // and suffix "7", not prefix "site" and suffix "-7".
        assert_eq!(split("site--7"), Some(("site-".to_string(), 7)));
    }

    #[test]
    fn test_split_prefers_rightmost_dash() {
        assert_eq!(split("my-site-42"), Some(("my-site".to_string(), 42)));
    }

    #[test]
    fn test_split_no_match() {
        assert_eq!(split("no-numbers-here"), None);
    }

    #[test]
    fn test_join_uses_absolute_value() {
        assert_eq!(join("site", 42), "site-42");
        assert_eq!(join("site", -42), "site-42");
    }

    #[test]
    fn test_join_min_i64_maps_to_max_i64() {
        assert_eq!(join("site", i64::MIN), format!("site-{}", i64::MAX));
    }

    #[test]
    fn test_round_trip_positive_edition() {
        let joined = join("site", 42);
        assert_eq!(split(&joined), Some(("site".to_string(), 42)));
    }
}
