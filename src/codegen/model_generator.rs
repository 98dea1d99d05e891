//! Assembles convention parts into the final model source text

use tracing::debug;

use super::conventions;
use super::template::{render, MODEL_STUB};
use crate::schema::Table;

/// Render the complete model class for a built table
pub fn generate_model(table: &Table, class_name: &str, namespace: &str) -> String {
    debug!(table = %table.name, class = class_name, "rendering model class");

    let doc_block = conventions::properties_doc_block(table);
    let primary = conventions::primary_key_part(table);
    let table_name = conventions::table_name_part(table);
    let timestamps = conventions::timestamps_part(table);
    let soft_deletes_import = conventions::soft_deletes_import_part(table);
    let soft_deletes_trait = conventions::soft_deletes_trait_part(table);
    let casts = conventions::casts_part(table);
    let incrementing = conventions::incrementing_part(table);
    let key_type = conventions::key_type_part(table);
    let enum_constants = conventions::enum_constants_part(table);

    render(
        MODEL_STUB,
        &[
            ("DummyNamespace", namespace),
            ("DummyClass", class_name),
            ("PropertiesDocBlockPart", &doc_block),
            ("PrimaryPropertyPart", &primary),
            ("TableNamePropertyPart", &table_name),
            ("NoTimestampsPropertyPart", &timestamps),
            ("SoftDeletesImportPart", &soft_deletes_import),
            ("SoftDeletesTraitPart", &soft_deletes_trait),
            ("CastsPropertyPart", &casts),
            ("IncrementingKeyPart", &incrementing),
            ("PrimaryKeyTypePart", &key_type),
            ("EnumConstantsPart", &enum_constants),
        ],
    )
}
