//! Render command handler

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::{load_schema, write_output_file};
use crate::output::OutputWriter;
use protodoc_core::{DocGenerator, GeneratorConfig, RenderType};
use tracing::{info, instrument};

/// Handle the render command
#[instrument(skip(args, config, output), fields(schema = %args.schema.display()))]
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let render_type = match args.format {
        Some(format) => RenderType::from(format),
        None => config.render.format.parse::<RenderType>().map_err(|_| {
            Error::config(format!(
                "unknown render format '{}' (expected markdown or json)",
                config.render.format
            ))
        })?,
    };

    let generator = DocGenerator::with_config(GeneratorConfig {
        include_toc: config.render.toc && !args.no_toc,
        include_samples: config.render.samples && !args.no_samples,
        sample_indent: config.sample.indent,
        include_scalar_table: config.render.scalar_table,
    });

    let schema = load_schema(&args.schema)?;
    output.debug(&format!("Rendering {} as {}", args.schema.display(), render_type))?;
    let document = generator
        .render(schema.files(), render_type)
        .map_err(|e| Error::Core(e.into()))?;

    info!(render_type = %render_type, bytes = document.len(), "Rendered documentation");

    match args.output_file {
        Some(path) => {
            write_output_file(&path, &document)?;
            output.success(&format!("✓ Documentation written to {}", path.display()))
        }
        None => output.write(&document),
    }
}
