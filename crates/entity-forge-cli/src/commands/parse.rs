use crate::cli::{GlobalOpts, ParseArgs};
use crate::commands::{enforce_strict, load_schema_files};
use crate::config::{load_config, schema_paths};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Run the `parse` command: parse .dsl files, report entity counts and
/// lenient-parse findings.
pub fn run(args: ParseArgs, global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let config = load_config(global.config.as_deref())?;
    let paths = schema_paths(&args.paths, &config);
    let files = load_schema_files(&paths)?;

    let mut total_entities = 0usize;
    let mut total_findings = 0usize;
    let mut file_results: Vec<serde_json::Value> = Vec::new();

    for file in &files {
        let count = file.entities.len();
        total_entities += count;
        total_findings += file.findings.len();
        file.report_findings(output, args.strict);

        if args.print_entities && !file.entities.is_empty() {
            print!("{}", entity_forge_dsl::print_all(&file.entities));
        }

        let filename = file.display_name();
        match output.mode {
            OutputMode::Human => {
                let noun = if count == 1 { "entity" } else { "entities" };
                output.status(&format!("  {filename} .... {count} {noun}"));
            }
            OutputMode::Json => {
                let names: Vec<&str> = file.entities.iter().map(|e| e.name.as_str()).collect();
                file_results.push(serde_json::json!({
                    "file": filename,
                    "entities": names,
                    "findings": file.findings_json(),
                }));
            }
            OutputMode::Plain => {
                println!("{filename}\t{count}\t{}", file.findings.len());
            }
        }
    }

    match output.mode {
        OutputMode::Human => {
            let summary = format!(
                "{total_entities} entities parsed from {} files, {total_findings} findings",
                files.len()
            );
            if total_findings > 0 {
                output.warn(&summary);
            } else {
                output.success(&summary);
            }
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "files": files.len(),
                "entities": total_entities,
                "findings": total_findings,
                "strict": args.strict,
                "results": file_results,
            }));
        }
        OutputMode::Plain => {}
    }

    if args.strict {
        enforce_strict(&files)?;
    }
    Ok(())
}
