// src/domain/identifiers.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Parse a path segment as an integer row key.
///
/// Anything that is not an optionally signed run of ASCII digits is a
/// validation failure. A well-formed integer that does not fit the `int4`
/// key columns can never match a row, so it is reported as not found.
pub(crate) fn parse_row_key(raw: &str, entity: &str) -> DomainResult<i32> {
    let digits = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::Validation(format!(
            "{entity} id must be an integer, got {raw:?}"
        )));
    }

    raw.parse::<i32>()
        .map_err(|_| DomainError::NotFound(format!("{entity} {raw} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_signed_integers() {
        assert_eq!(parse_row_key("42", "article").unwrap(), 42);
        assert_eq!(parse_row_key("+7", "article").unwrap(), 7);
        assert_eq!(parse_row_key("-3", "article").unwrap(), -3);
    }

    #[test]
    fn rejects_non_numeric_segments() {
        for raw in ["forklift", "", "-", "1.5", "12abc", " 1"] {
            assert!(matches!(
                parse_row_key(raw, "article"),
                Err(DomainError::Validation(_))
            ));
        }
    }

    #[test]
    fn out_of_range_integer_is_not_found() {
        assert!(matches!(
            parse_row_key("4354574566575645", "article"),
            Err(DomainError::NotFound(_))
        ));
    }
}
