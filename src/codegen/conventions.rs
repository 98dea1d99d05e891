//! Convention detector - derives each stub part from a built `Table`
//!
//! Every function here is a pure read over the aggregate and returns the
//! literal text substituted for one placeholder. Empty string means the
//! convention does not apply and the placeholder line is cleaned away by the
//! template renderer.

use crate::codegen::naming::to_constant_name;
use crate::codegen::types::PhpType;
use crate::schema::Table;

/// Docblock listing every column's mapped type, nullability and name
pub fn properties_doc_block(table: &Table) -> String {
    let mut lines = vec!["/**".to_string()];
    for column in &table.columns {
        let nullable = if column.nullable { "|null" } else { "" };
        lines.push(format!(
            " * @property {}{} ${}",
            column.php_type().as_str(),
            nullable,
            column.name
        ));
    }
    lines.push(" */".to_string());
    lines.join("\n")
}

/// `$primaryKey` declaration; composite or absent keys get a visible marker
pub fn primary_key_part(table: &Table) -> String {
    if let [name] = table.primary_key.columns.as_slice() {
        format!("protected $primaryKey = '{}';", name)
    } else {
        "protected $primaryKey = ''; // Unknown key".to_string()
    }
}

/// `$table` declaration
pub fn table_name_part(table: &Table) -> String {
    format!("protected $table = '{}';", table.name)
}

/// Timestamp tracking is the framework default; declare it off unless both
/// `created_at` and `updated_at` exist
pub fn timestamps_part(table: &Table) -> String {
    if table.has_column("created_at") && table.has_column("updated_at") {
        String::new()
    } else {
        "protected $timestamps = false;".to_string()
    }
}

fn is_soft_deletes(table: &Table) -> bool {
    table.has_column("deleted_at")
}

/// SoftDeletes import line (with its trailing newline, as the stub expects)
pub fn soft_deletes_import_part(table: &Table) -> String {
    if is_soft_deletes(table) {
        "use Illuminate\\Database\\Eloquent\\SoftDeletes;\n".to_string()
    } else {
        String::new()
    }
}

/// SoftDeletes trait activation inside the class body
pub fn soft_deletes_trait_part(table: &Table) -> String {
    if is_soft_deletes(table) {
        "use SoftDeletes;".to_string()
    } else {
        String::new()
    }
}

/// `$casts` block with one json entry per json/jsonb column, in column order
pub fn casts_part(table: &Table) -> String {
    let casts: Vec<String> = table
        .columns
        .iter()
        .filter(|c| matches!(c.catalog_type.as_str(), "json" | "jsonb"))
        .map(|c| format!("        '{}' => 'json',", c.name))
        .collect();

    if casts.is_empty() {
        return String::new();
    }

    format!("protected $casts = [\n{}\n    ];", casts.join("\n"))
}

/// `$incrementing = false` when the single key column's default is not
/// sequence-backed.
///
/// The lineage of this check flipped polarity more than once; the rule here
/// is pinned by test: a `nextval` default means the framework default
/// (incrementing) stands and nothing is emitted.
pub fn incrementing_part(table: &Table) -> String {
    match table.single_primary_column() {
        Some(key) if !key.is_auto_increment() => "public $incrementing = false;".to_string(),
        _ => String::new(),
    }
}

/// `$keyType = 'string'` when the single key column maps to string
pub fn key_type_part(table: &Table) -> String {
    match table.single_primary_column() {
        Some(key) if key.php_type() == PhpType::PString => {
            "protected $keyType = 'string';".to_string()
        }
        _ => String::new(),
    }
}

/// One named constant per extracted enum value, in column order
pub fn enum_constants_part(table: &Table) -> String {
    let mut constants = Vec::new();
    for column in &table.columns {
        for value in column.enum_values() {
            constants.push(format!(
                "public const {} = '{}';",
                to_constant_name(&column.name, &value),
                value
            ));
        }
    }
    // Continuation lines align with the placeholder's class-body indentation
    constants.join("\n    ")
}
