use std::fs;
use std::path::{Path, PathBuf};

use dialoguer::Confirm;

use crate::cli::{GlobalOpts, InitArgs};
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

const EXAMPLE_SCHEMA: &str = "\
# Example schema. Each entity becomes one Java class.
# Types: long, string, integer, datetime, boolean (anything else maps to Object).

entity User {
    id: long @Id
    username: string @NotNull
    email: string @Email
    age: integer
    active: boolean
    createdAt: datetime
}
";

const CONFIG_TEMPLATE: &str = r#"[generator]
package = "com.example.generated"
extension = "java"
indent = 4
output_dir = "generated/"

[cli]
default_schema_dir = "schemas/"
"#;

/// Run the `init` command: scaffold a new entity-forge project.
pub fn run(args: InitArgs, _global: &GlobalOpts, output: &OutputContext) -> Result<(), CliError> {
    let project_dir = PathBuf::from(&args.name);

    if project_dir.exists() && !args.force {
        if args.yes || !output.interactive() {
            return Err(CliError::DirectoryExists { path: project_dir });
        }
        let proceed = Confirm::new()
            .with_prompt(format!(
                "Directory '{}' already exists. Write project files into it?",
                project_dir.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| CliError::Other(e.to_string()))?;
        if !proceed {
            return Err(CliError::Cancelled);
        }
    }

    create_project_structure(&project_dir)?;
    tracing::info!(path = %project_dir.display(), "project created");

    match output.mode {
        OutputMode::Human => {
            output.success(&format!("Created project '{}'.", args.name));
            if !output.quiet {
                println!();
                println!("  {}/", project_dir.display());
                println!("    config.toml");
                println!("    schemas/");
                println!("      example.dsl");
                println!();
                println!("Next steps:");
                println!("  cd {}", args.name);
                println!("  entity-forge parse            Check schemas");
                println!("  entity-forge generate         Write Java classes to generated/");
            }
        }
        OutputMode::Json => {
            output.print_json(&serde_json::json!({
                "project": args.name,
                "path": project_dir.display().to_string(),
                "files": ["config.toml", "schemas/example.dsl"],
            }));
        }
        OutputMode::Plain => {
            println!("{}\t{}", args.name, project_dir.display());
        }
    }

    Ok(())
}

fn create_project_structure(project_dir: &Path) -> Result<(), CliError> {
    create_dir(&project_dir.join("schemas"))?;
    write_file(&project_dir.join("schemas/example.dsl"), EXAMPLE_SCHEMA)?;
    write_file(&project_dir.join("config.toml"), CONFIG_TEMPLATE)
}

fn create_dir(path: &Path) -> Result<(), CliError> {
    fs::create_dir_all(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
