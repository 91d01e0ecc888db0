use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Generate Java entity classes from a schema DSL.
///
/// Reads `.dsl` files describing entities and their typed fields, and
/// writes one Java class per entity with private members, a no-argument
/// constructor, and getters/setters.
#[derive(Parser)]
#[command(
    name = "entity-forge",
    version,
    after_help = "Use 'entity-forge <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: ENTITY_FORGE_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "ENTITY_FORGE_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new entity-forge project
    Init(InitArgs),

    /// Parse and check .dsl schema files
    Parse(ParseArgs),

    /// Generate Java classes from .dsl schema files
    Generate(GenerateArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `entity-forge init`.
#[derive(Args)]
pub struct InitArgs {
    /// Project name (becomes directory name)
    pub name: String,

    /// Force creation even if directory exists
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Skip interactive prompts, use defaults
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

/// Arguments for `entity-forge parse`.
#[derive(Args)]
pub struct ParseArgs {
    /// Schema files or directories to parse (default: [cli] default_schema_dir)
    pub paths: Vec<PathBuf>,

    /// Print the parsed entities back as DSL
    #[arg(long = "print")]
    pub print_entities: bool,

    /// Treat every lenient-parse finding as an error
    #[arg(long = "strict")]
    pub strict: bool,
}

/// Arguments for `entity-forge generate`.
#[derive(Args)]
pub struct GenerateArgs {
    /// Schema files or directories to generate from (default: [cli] default_schema_dir)
    pub paths: Vec<PathBuf>,

    /// Output directory (default: [generator] output_dir)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Java package for generated classes (default: [generator] package)
    #[arg(long = "package")]
    pub package: Option<String>,

    /// Refuse to generate from schemas with lenient-parse findings
    #[arg(long = "strict")]
    pub strict: bool,

    /// Keep generating remaining entities after a failure
    #[arg(short = 'k', long = "keep-going")]
    pub keep_going: bool,
}

/// Arguments for `entity-forge completions`.
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_parser = ["bash", "zsh", "fish", "powershell", "elvish"])]
    pub shell: String,
}
