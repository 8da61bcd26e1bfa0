//! Sample command handler

use crate::cli::SampleArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{load_schema, write_output_file};
use crate::output::OutputWriter;
use protodoc_core::samples::SampleError;
use protodoc_core::SchemaIndex;
use tracing::{info, instrument};

/// Handle the sample command
#[instrument(skip(args, config, output), fields(message = %args.message))]
pub fn handle_sample(args: SampleArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let indent = args.indent.unwrap_or(config.sample.indent);
    let schema = load_schema(&args.schema)?;
    let index = SchemaIndex::new(schema.files());
    output.debug(&format!(
        "Indexed {} message(s) from {}",
        schema.message_count(),
        args.schema.display()
    ))?;

    let sample = index.sample(&args.message).map_err(|e| match e {
        SampleError::MessageNotFound { name } => Error::MessageNotFound {
            name,
            schema: args.schema.clone(),
        },
        other => Error::Core(other.into()),
    })?;

    info!(indent, "Sample generated");

    match args.output_file {
        Some(path) => {
            let text = sample.to_json_string(indent)?;
            write_output_file(&path, &format!("{}\n", text))?;
            output.success(&format!("✓ Sample written to {}", path.display()))
        }
        None => output.sample(&sample, indent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::handlers::fixtures::inventory_schema;
    use crate::output::capture::SharedBuffer;
    use tempfile::TempDir;

    fn args(schema: std::path::PathBuf, message: &str) -> SampleArgs {
        SampleArgs {
            schema,
            message: message.to_string(),
            indent: None,
            output_file: None,
        }
    }

    #[test]
    fn test_sample_uses_configured_indent() {
        let dir = TempDir::new().unwrap();
        let schema = inventory_schema(&dir);
        let buffer = SharedBuffer::default();
        let mut output =
            OutputWriter::with_writer(OutputFormat::Human, false, false, 0, Box::new(buffer.clone()));

        let mut config = Config::default();
        config.sample.indent = 4;
        handle_sample(args(schema, "inventory.Item"), &config, &mut output).unwrap();

        assert_eq!(
            buffer.contents(),
            "{\n    \"sku\": \"{{string}}\",\n    \"count\": 123,\n    \"state\": 3\n}\n"
        );
    }

    #[test]
    fn test_sample_to_file() {
        let dir = TempDir::new().unwrap();
        let schema = inventory_schema(&dir);
        let target = dir.path().join("out/item.json");
        let buffer = SharedBuffer::default();
        let mut output =
            OutputWriter::with_writer(OutputFormat::Human, false, true, 0, Box::new(buffer.clone()));

        let mut sample_args = args(schema, "inventory.Item");
        sample_args.indent = Some(0);
        sample_args.output_file = Some(target.clone());
        handle_sample(sample_args, &Config::default(), &mut output).unwrap();

        let written = std::fs::read_to_string(target).unwrap();
        assert_eq!(written, "{\n\"sku\": \"{{string}}\",\n\"count\": 123,\n\"state\": 3\n}\n");
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn test_unknown_message() {
        let dir = TempDir::new().unwrap();
        let schema = inventory_schema(&dir);
        let mut output = OutputWriter::with_writer(
            OutputFormat::Human,
            false,
            false,
            0,
            Box::new(SharedBuffer::default()),
        );

        let err = handle_sample(args(schema, "inventory.Nope"), &Config::default(), &mut output)
            .unwrap_err();
        assert!(matches!(err, Error::MessageNotFound { ref name, .. } if name == "inventory.Nope"));
        assert_eq!(err.exit_code(), 7);
    }
}
