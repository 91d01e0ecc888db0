use std::path::PathBuf;

use entity_forge_codegen::{EntityOutcome, Generator};
use entity_forge_core::types::Entity;

use crate::cli::{GenerateArgs, GlobalOpts};
use crate::commands::{enforce_strict, load_schema_files};
use crate::config::{load_config, resolve_generator, schema_paths};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};
use crate::progress;

/// Run the `generate` command: parse .dsl files and write one class per
/// entity into the output directory.
pub fn run(
    args: GenerateArgs,
    global: &GlobalOpts,
    output: &OutputContext,
) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let paths = schema_paths(&args.paths, &config);
    let files = load_schema_files(&paths)?;

    for file in &files {
        file.report_findings(output, args.strict);
    }
    if args.strict {
        enforce_strict(&files)?;
    }

    let entities: Vec<Entity> = files
        .into_iter()
        .flat_map(|file| file.entities)
        .collect();

    let (output_dir, options) =
        resolve_generator(&config, args.output.as_deref(), args.package.as_deref());
    let generator = Generator::with_options(output_dir, options);
    let output_dir = generator.output_dir();
    tracing::info!(
        output_dir = %output_dir.display(),
        package = %generator.options().package,
        entities = entities.len(),
        "generating"
    );

    let outcomes = if args.keep_going {
        generate_all(&generator, &entities, output)
    } else {
        generate_until_failure(&generator, &entities, output)?
    };

    let written: Vec<&PathBuf> = outcomes.iter().filter_map(|o| o.result.as_ref().ok()).collect();
    let failed = outcomes.len() - written.len();

    match output.mode {
        OutputMode::Human => {
            for outcome in &outcomes {
                if let Err(e) = &outcome.result {
                    output.warn(&format!("{}: {e}", outcome.entity));
                }
            }
            let summary = format!(
                "{} classes written to {}",
                written.len(),
                output_dir.display()
            );
            if failed > 0 {
                output.warn(&summary);
            } else {
                output.success(&summary);
            }
        }
        OutputMode::Json => {
            let results: Vec<serde_json::Value> = outcomes.iter().map(outcome_json).collect();
            output.print_json(&serde_json::json!({
                "output_dir": output_dir.display().to_string(),
                "written": written.len(),
                "failed": failed,
                "results": results,
            }));
        }
        OutputMode::Plain => {
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(path) => println!("{}\tok\t{}", outcome.entity, path.display()),
                    Err(e) => println!("{}\terror\t{e}", outcome.entity),
                }
            }
        }
    }

    if failed > 0 {
        return Err(CliError::PartialGeneration {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

/// Generate in order, returning the first failure as the command's error.
fn generate_until_failure(
    generator: &Generator,
    entities: &[Entity],
    output: &OutputContext,
) -> Result<Vec<EntityOutcome>, CliError> {
    let bar = output
        .show_progress()
        .then(|| progress::create_bar(entities.len() as u64, "Generating"));

    generator.create_output_dir()?;

    let mut outcomes = Vec::with_capacity(entities.len());
    for entity in entities {
        let result = generator.write_entity(entity);
        match result {
            Ok(path) => {
                if let Some(bar) = &bar {
                    bar.inc(1);
                }
                outcomes.push(EntityOutcome {
                    entity: entity.name.to_string(),
                    result: Ok(path),
                });
            }
            Err(e) => {
                if let Some(bar) = &bar {
                    progress::finish_spinner_error(bar, &format!("{} failed", entity.name));
                }
                return Err(e.into());
            }
        }
    }

    if let Some(bar) = &bar {
        progress::finish_spinner(bar, "Generated");
    }
    Ok(outcomes)
}

/// Generate every entity, recording failures instead of stopping.
fn generate_all(
    generator: &Generator,
    entities: &[Entity],
    output: &OutputContext,
) -> Vec<EntityOutcome> {
    let spinner = output
        .show_progress()
        .then(|| progress::create_spinner("Generating..."));
    let report = generator.generate_each(entities);
    if let Some(sp) = &spinner {
        if report.is_success() {
            progress::finish_spinner(sp, "Generated");
        } else {
            progress::finish_spinner_error(sp, "some entities failed");
        }
    }
    report.outcomes
}

fn outcome_json(outcome: &EntityOutcome) -> serde_json::Value {
    match &outcome.result {
        Ok(path) => serde_json::json!({
            "entity": outcome.entity,
            "path": path.display().to_string(),
        }),
        Err(e) => serde_json::json!({
            "entity": outcome.entity,
            "error": e.to_string(),
        }),
    }
}
