//! List command handler

use crate::cli::{ListArgs, OutputFormat};
use crate::error::Result;
use crate::handlers::utils::load_schema;
use crate::output::OutputWriter;
use protodoc_core::SchemaIndex;
use serde::Serialize;
use tracing::instrument;

/// A declared message or enum
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Declaration {
    name: String,
    kind: &'static str,
    file: String,
    members: usize,
}

/// A field whose type is not declared anywhere in the schema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UnresolvedEntry {
    message: String,
    field: String,
    type_name: String,
}

/// Handle the list command
#[instrument(skip(args, output), fields(schema = %args.schema.display()))]
pub fn handle_list(args: ListArgs, output: &mut OutputWriter) -> Result<()> {
    let schema = load_schema(&args.schema)?;
    let index = SchemaIndex::new(schema.files());

    if args.unresolved {
        list_unresolved(&index, output)
    } else {
        list_declarations(&index, output)
    }
}

fn list_declarations(index: &SchemaIndex<'_>, output: &mut OutputWriter) -> Result<()> {
    let mut declarations: Vec<Declaration> = index
        .messages()
        .map(|indexed| Declaration {
            name: indexed.full_name().to_string(),
            kind: "message",
            file: indexed.file.name.clone(),
            members: indexed.fields.len(),
        })
        .collect();
    declarations.extend(index.enums().map(|(enumeration, file)| Declaration {
        name: enumeration.full_name.clone(),
        kind: "enum",
        file: file.name.clone(),
        members: enumeration.values.len(),
    }));

    if output.format() != OutputFormat::Human {
        return output.data(&declarations);
    }

    if declarations.is_empty() {
        return output.info("Schema declares no messages or enums");
    }

    output.section("Declarations")?;
    let rows = declarations
        .into_iter()
        .map(|d| vec![d.name, d.kind.to_string(), d.members.to_string(), d.file])
        .collect();
    output.table(&["Name", "Kind", "Members", "File"], rows)
}

fn list_unresolved(index: &SchemaIndex<'_>, output: &mut OutputWriter) -> Result<()> {
    let entries: Vec<UnresolvedEntry> = index
        .unresolved_fields()
        .into_iter()
        .map(|u| UnresolvedEntry {
            message: u.message.to_string(),
            field: u.field.to_string(),
            type_name: u.type_name.to_string(),
        })
        .collect();

    if output.format() != OutputFormat::Human {
        return output.data(&entries);
    }

    if entries.is_empty() {
        return output.success("✓ Every field type resolves");
    }

    output.warning(&format!(
        "{} field(s) reference undeclared types and are left out of samples",
        entries.len()
    ))?;
    let rows = entries
        .into_iter()
        .map(|e| vec![e.message, e.field, e.type_name])
        .collect();
    output.table(&["Message", "Field", "Type"], rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::fixtures::inventory_schema;
    use crate::output::capture::SharedBuffer;
    use tempfile::TempDir;

    fn run(format: OutputFormat, unresolved: bool) -> String {
        let dir = TempDir::new().unwrap();
        let buffer = SharedBuffer::default();
        let mut output = OutputWriter::with_writer(format, false, false, 0, Box::new(buffer.clone()));
        let args = ListArgs {
            schema: inventory_schema(&dir),
            unresolved,
        };
        handle_list(args, &mut output).unwrap();
        buffer.contents()
    }

    #[test]
    fn test_list_declarations_table() {
        let text = run(OutputFormat::Human, false);

        assert!(text.contains("=== Declarations ==="));
        assert!(text.contains("inventory.Item  │ message │ 4       │ inventory.proto"));
        assert!(text.contains("inventory.State │ enum    │ 2       │ inventory.proto"));
    }

    #[test]
    fn test_list_declarations_json() {
        let text = run(OutputFormat::Json, false);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["name"], "inventory.Item");
        assert_eq!(value[1]["kind"], "enum");
    }

    #[test]
    fn test_list_unresolved() {
        let text = run(OutputFormat::Human, true);
        assert!(text.starts_with("WARNING: 1 field(s) reference undeclared types"));
        assert!(text.contains("inventory.Item │ supplier │ vendor.Supplier"));

        let json: serde_json::Value = serde_json::from_str(&run(OutputFormat::Json, true)).unwrap();
        assert_eq!(json[0]["typeName"], "vendor.Supplier");
    }
}
