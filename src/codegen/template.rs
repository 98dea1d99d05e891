//! Model stub and placeholder substitution
//!
//! Substitution is literal text replacement; catalog identifiers flow into
//! the output unescaped (the catalog is administrator-controlled).

/// Class-body indentation of an empty placeholder line in the stub
const EMPTY_BODY_INDENT: &str = "    ";

/// The Eloquent model stub. Placeholder tokens are replaced verbatim; empty
/// parts leave indentation-only lines the cleanup pass removes.
pub const MODEL_STUB: &str = "\
<?php

namespace DummyNamespace;

SoftDeletesImportPart
use Illuminate\\Database\\Eloquent\\Model;

PropertiesDocBlockPart
class DummyClass extends Model
{
    SoftDeletesTraitPart

    EnumConstantsPart

    TableNamePropertyPart

    PrimaryPropertyPart

    IncrementingKeyPart

    PrimaryKeyTypePart

    NoTimestampsPropertyPart

    CastsPropertyPart
}
";

/// Replace each placeholder token with its produced text, then clean up
/// the formatting artifacts empty parts leave behind
pub fn render(stub: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = stub.to_string();
    for (placeholder, text) in substitutions {
        output = output.replace(placeholder, text);
    }
    clean_empty_lines(&output)
}

/// Drop indentation-only lines left by empty placeholders and collapse runs
/// of blank lines to a single blank line
fn clean_empty_lines(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line == EMPTY_BODY_INDENT {
            continue;
        }
        if line.is_empty() && lines.last().is_some_and(|prev| prev.is_empty()) {
            continue;
        }
        lines.push(line);
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}
