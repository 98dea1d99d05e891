//! Check-constraint parser for enum-like IN-list constraints
//!
//! Postgres renders a `CHECK (col IN ('a', 'b'))` constraint as
//! `((col)::text = ANY ((ARRAY['a'::character varying, 'b'::character varying])::text[]))`.
//! This module recognizes that shape and pulls out the literal values.

use regex::Regex;

/// Extract enum values from a check-constraint definition.
///
/// Returns the literals in constraint order, or an empty vec when the
/// definition is not an IN-list constraint on exactly `column_name`. A
/// segment whose literal sub-pattern fails to match contributes an empty
/// string rather than an error.
pub fn extract_enum_values(definition: &str, column_name: &str) -> Vec<String> {
    let pattern = format!(
        r"\(\({}\)::text = ANY \(\(ARRAY\[(.*)\]\)::text\[\]\)\)",
        regex::escape(column_name)
    );
    let outer = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return Vec::new(),
    };

    let body = match outer.captures(definition).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => return Vec::new(),
    };

    // Literal-cast grammar guarantees the separator never appears in values
    let literal = Regex::new(r"^'(.*)'::character varying$").unwrap();
    body.split(", ")
        .map(|segment| {
            literal
                .captures(segment)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS_CHECK: &str =
        "((status)::text = ANY ((ARRAY['a'::character varying, 'b'::character varying])::text[]))";

    #[test]
    fn test_extracts_in_list_values() {
        assert_eq!(extract_enum_values(STATUS_CHECK, "status"), vec!["a", "b"]);
    }

    #[test]
    fn test_unrelated_text_yields_nothing() {
        assert!(extract_enum_values("CHECK ((price > 0))", "status").is_empty());
        assert!(extract_enum_values("", "status").is_empty());
    }

    #[test]
    fn test_column_name_must_match_exactly() {
        assert!(extract_enum_values(STATUS_CHECK, "state").is_empty());
    }

    #[test]
    fn test_single_value() {
        let definition =
            "((kind)::text = ANY ((ARRAY['default'::character varying])::text[]))";
        assert_eq!(extract_enum_values(definition, "kind"), vec!["default"]);
    }

    #[test]
    fn test_hyphenated_values() {
        let definition = "((delivery)::text = ANY ((ARRAY['same-day'::character varying, 'next-day'::character varying])::text[]))";
        assert_eq!(
            extract_enum_values(definition, "delivery"),
            vec!["same-day", "next-day"]
        );
    }

    #[test]
    fn test_malformed_segment_contributes_empty_string() {
        // Second literal lacks the ::character varying cast
        let definition =
            "((status)::text = ANY ((ARRAY['a'::character varying, 'b'::text])::text[]))";
        assert_eq!(extract_enum_values(definition, "status"), vec!["a", ""]);
    }

    #[test]
    fn test_regex_metacharacters_in_column_name() {
        // Defensive: an exotic identifier must not break the pattern
        assert!(extract_enum_values(STATUS_CHECK, "sta(tus").is_empty());
    }
}
