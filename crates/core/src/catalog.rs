//! Movie catalog rules: field bounds, filter normalisation and genre id sets.

use std::collections::BTreeSet;

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Field bounds
   -------------------------------------------------------------------------- */

/// Earliest accepted release year (the first motion pictures).
pub const MIN_RELEASE_YEAR: i32 = 1888;

/// Latest accepted release year.
pub const MAX_RELEASE_YEAR: i32 = 2100;

/// Lowest rating score.
pub const MIN_SCORE: i32 = 1;

/// Highest rating score.
pub const MAX_SCORE: i32 = 10;

/* --------------------------------------------------------------------------
   Scalar checks
   -------------------------------------------------------------------------- */

/// Validate a rating score against `[MIN_SCORE, MAX_SCORE]`.
pub fn validate_score(score: i32) -> Result<(), CoreError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(CoreError::Validation(format!(
            "score must be between {MIN_SCORE} and {MAX_SCORE}, got {score}"
        )));
    }
    Ok(())
}

/// Validate a release year used as a filter or field value.
pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "release_year must be between {MIN_RELEASE_YEAR} and {MAX_RELEASE_YEAR}, got {year}"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Filters
   -------------------------------------------------------------------------- */

/// Trim a text filter; blank input means "no filter".
pub fn normalize_filter(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Build an `ILIKE` pattern that matches `needle` as a literal substring.
///
/// `%`, `_` and `\` in the input are escaped with `\`, which is the default
/// LIKE escape character in PostgreSQL.
///
/// ```
/// use reelrate_core::catalog::partial_match_pattern;
/// assert_eq!(partial_match_pattern("matrix"), "%matrix%");
/// assert_eq!(partial_match_pattern("100%"), "%100\\%%");
/// ```
pub fn partial_match_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/* --------------------------------------------------------------------------
   Genre id sets
   -------------------------------------------------------------------------- */

/// Collapse a client-supplied genre id list into a sorted, duplicate-free set.
pub fn normalize_genre_ids(ids: &[DbId]) -> Vec<DbId> {
    ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
}

/// Return the first requested id that is absent from `found`.
pub fn first_missing_id(requested: &[DbId], found: &[DbId]) -> Option<DbId> {
    let found: BTreeSet<DbId> = found.iter().copied().collect();
    requested.iter().copied().find(|id| !found.contains(id))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn score_bounds_are_inclusive() {
        for s in MIN_SCORE..=MAX_SCORE {
            assert!(validate_score(s).is_ok());
        }
        assert_matches!(validate_score(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_score(11), Err(CoreError::Validation(_)));
        assert_matches!(validate_score(-5), Err(CoreError::Validation(_)));
    }

    #[test]
    fn release_year_bounds() {
        assert!(validate_release_year(1888).is_ok());
        assert!(validate_release_year(1999).is_ok());
        assert!(validate_release_year(2100).is_ok());
        assert!(validate_release_year(1887).is_err());
        assert!(validate_release_year(2101).is_err());
    }

    #[test]
    fn blank_filters_are_dropped() {
        assert_eq!(normalize_filter(None), None);
        assert_eq!(normalize_filter(Some("")), None);
        assert_eq!(normalize_filter(Some("   ")), None);
        assert_eq!(normalize_filter(Some("  Drama ")), Some("Drama".into()));
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(partial_match_pattern("a_b"), "%a\\_b%");
        assert_eq!(partial_match_pattern("c:\\d"), "%c:\\\\d%");
        assert_eq!(partial_match_pattern(""), "%%");
    }

    #[test]
    fn genre_ids_are_sorted_and_deduplicated() {
        assert_eq!(normalize_genre_ids(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
        assert!(normalize_genre_ids(&[]).is_empty());
    }

    #[test]
    fn first_missing_id_reports_in_request_order() {
        assert_eq!(first_missing_id(&[1, 2, 3], &[1, 2, 3]), None);
        assert_eq!(first_missing_id(&[1, 7, 9], &[1]), Some(7));
        assert_eq!(first_missing_id(&[], &[]), None);
    }
}
