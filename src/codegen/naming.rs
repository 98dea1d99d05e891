//! Naming utilities for generated PHP code

use heck::ToUpperCamelCase;

/// Convert a table name to a model class name (StudlyCase)
pub fn to_class_name(table_name: &str) -> String {
    table_name.to_upper_camel_case()
}

/// Constant name for an enum value: UPPER(column + "_" + value),
/// hyphens replaced with underscores
pub fn to_constant_name(column_name: &str, value: &str) -> String {
    format!("{}_{}", column_name, value)
        .to_uppercase()
        .replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_class_name() {
        assert_eq!(to_class_name("users"), "Users");
        assert_eq!(to_class_name("order_items"), "OrderItems");
        assert_eq!(to_class_name("user_settings"), "UserSettings");
    }

    #[test]
    fn test_to_constant_name() {
        assert_eq!(to_constant_name("status", "active"), "STATUS_ACTIVE");
        assert_eq!(to_constant_name("delivery", "same-day"), "DELIVERY_SAME_DAY");
        assert_eq!(to_constant_name("kind", "B2B"), "KIND_B2B");
    }
}
