//! PostgreSQL catalog type to PHP type mapping

/// Target PHP type for a docblock annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhpType {
    Int,
    Bool,
    Float,
    PString,
    Array,
}

impl PhpType {
    /// Get the type string as it appears in a `@property` annotation
    pub fn as_str(&self) -> &'static str {
        match self {
            PhpType::Int => "int",
            PhpType::Bool => "bool",
            PhpType::Float => "float",
            PhpType::PString => "string",
            PhpType::Array => "array",
        }
    }
}

/// Map a raw catalog type name to its PHP type.
///
/// Exact match on the catalog's canonical spelling; anything unrecognized
/// falls open to string so generation never aborts on an exotic column type.
pub fn php_type(catalog_type: &str) -> PhpType {
    match catalog_type {
        "bigint" | "integer" | "smallint" => PhpType::Int,
        "boolean" => PhpType::Bool,
        "real" | "double precision" => PhpType::Float,
        "json" | "jsonb" => PhpType::Array,
        "character varying"
        | "time with time zone"
        | "time without time zone"
        | "timestamp with time zone"
        | "timestamp without time zone" => PhpType::PString,
        _ => PhpType::PString,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_types() {
        assert_eq!(php_type("bigint"), PhpType::Int);
        assert_eq!(php_type("integer"), PhpType::Int);
        assert_eq!(php_type("smallint"), PhpType::Int);
    }

    #[test]
    fn test_boolean_type() {
        assert_eq!(php_type("boolean"), PhpType::Bool);
    }

    #[test]
    fn test_float_types() {
        assert_eq!(php_type("real"), PhpType::Float);
        assert_eq!(php_type("double precision"), PhpType::Float);
    }

    #[test]
    fn test_json_types() {
        assert_eq!(php_type("json"), PhpType::Array);
        assert_eq!(php_type("jsonb"), PhpType::Array);
    }

    #[test]
    fn test_string_types() {
        assert_eq!(php_type("character varying"), PhpType::PString);
        assert_eq!(php_type("time with time zone"), PhpType::PString);
        assert_eq!(php_type("time without time zone"), PhpType::PString);
        assert_eq!(php_type("timestamp with time zone"), PhpType::PString);
        assert_eq!(php_type("timestamp without time zone"), PhpType::PString);
    }

    #[test]
    fn test_unknown_types_fall_open_to_string() {
        assert_eq!(php_type("uuid"), PhpType::PString);
        assert_eq!(php_type("bytea"), PhpType::PString);
        assert_eq!(php_type("numeric"), PhpType::PString);
        assert_eq!(php_type(""), PhpType::PString);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        // Only the catalog's canonical lowercase spelling matches
        assert_eq!(php_type("BIGINT"), PhpType::PString);
        assert_eq!(php_type("Boolean"), PhpType::PString);
    }
}
