//! CLI entry point for umlgraph.
//!
//! Parses C# files, resolves type names across them and prints class-diagram
//! relationships as PlantUML or JSON.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use umlgraph::io::{ExitCode, JsonResponse, OutputFormat};
use umlgraph::parsing::ParsedFile;
use umlgraph::parsing::csharp::{
    CSharpParser, DeclarationTable, SemanticModel, extract_file, type_declarations,
    type_definition_text,
};
use umlgraph::error::ErrorContext;
use umlgraph::render::render_diagram;
use umlgraph::{GraphError, GraphResult, RelationshipCollection, Settings, TypeNameText};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Class-diagram relationships from C# sources
#[derive(Parser)]
#[command(
    name = "umlgraph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Class-diagram relationships from C# sources",
    long_about = "Resolve C# type names across files and print inheritance, nesting and association edges as PlantUML.",
    next_line_help = true,
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    #[command(about = "Set up .umlgraph directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration
    #[command(about = "Display active settings")]
    Config,

    /// Print relationships between the types of the given files
    #[command(
        after_help = "Examples:\n  umlgraph relations Models/*.cs\n  umlgraph relations Order.cs Line.cs --json"
    )]
    Relations {
        /// C# source files
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Shape names from syntax only, without cross-file resolution
        #[arg(long)]
        syntax_only: bool,

        /// Print type definition lines before the edges
        #[arg(long)]
        definitions: bool,

        /// Leave type definition lines out, whatever the settings say
        #[arg(long, conflicts_with = "definitions")]
        no_definitions: bool,
    },

    /// Print the name text and definition of every declared type
    Names {
        /// C# source files
        #[arg(required = true, num_args = 1..)]
        files: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Shape names from syntax only, without cross-file resolution
        #[arg(long)]
        syntax_only: bool,
    },
}

#[derive(Debug, Serialize)]
struct RelationsOutput {
    definitions: Vec<String>,
    relationships: RelationshipCollection,
}

#[derive(Debug, Serialize)]
struct NameEntry {
    file: PathBuf,
    name: TypeNameText,
    definition: String,
}

fn main() {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(config_path) => Settings::load_from(config_path).unwrap_or_else(|e| {
            let error = GraphError::ConfigError {
                reason: format!("{}: {e}", config_path.display()),
            };
            eprintln!("Error: {error}");
            std::process::exit(ExitCode::from_error(&error).into());
        }),
        None => Settings::load().unwrap_or_else(|e| {
            eprintln!("Configuration error: {e}");
            Settings::default()
        }),
    };

    init_logging(settings.debug || cli.verbose);

    let (result, format) = match &cli.command {
        Commands::Init { force } => {
            match Settings::init_config_file(*force) {
                Ok(path) => {
                    println!("Created configuration file at: {}", path.display());
                    println!("Edit this file to customize your settings.");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(ExitCode::ConfigError.into());
                }
            }
            return;
        }

        Commands::Config => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            match toml::to_string_pretty(&settings) {
                Ok(toml_str) => println!("{toml_str}"),
                Err(e) => eprintln!("Error displaying config: {e}"),
            }
            return;
        }

        Commands::Relations {
            files,
            json,
            syntax_only,
            definitions,
            no_definitions,
        } => {
            let format = OutputFormat::resolve(*json, &settings.output.format);
            let definitions = !*no_definitions && (*definitions || settings.output.definitions);
            (
                run_relations(files, &settings, format, *syntax_only, definitions),
                format,
            )
        }

        Commands::Names {
            files,
            json,
            syntax_only,
        } => {
            let format = OutputFormat::resolve(*json, &settings.output.format);
            (run_names(files, &settings, format, *syntax_only), format)
        }
    };

    if let Err(error) = result {
        if format.is_json() {
            let response = JsonResponse::from_error(&error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error serializing response: {e}"),
            }
        } else {
            eprintln!("Error: {error}");
            for suggestion in error.recovery_suggestions() {
                eprintln!("  - {suggestion}");
            }
        }
        std::process::exit(ExitCode::from_error(&error).into());
    }
}

/// Install the stderr log writer. Debug output only when asked for.
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read and parse every file in parallel, keeping argument order.
fn load_files(files: &[PathBuf], settings: &Settings) -> GraphResult<Vec<ParsedFile>> {
    for path in files {
        if !settings.accepts(path) {
            return Err(GraphError::UnsupportedFileType {
                path: path.clone(),
                extension: path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or_default()
                    .to_string(),
                supported: settings.extensions.join(", "),
            });
        }
    }

    files
        .par_iter()
        .map(|path| {
            let mut parser = CSharpParser::new().map_err(|e| GraphError::ParseError {
                path: path.clone(),
                language: "C#".to_string(),
                reason: e.to_string(),
            })?;
            ParsedFile::load(path, &mut parser)
        })
        .collect()
}

fn build_model(
    parsed: &[ParsedFile],
    settings: &Settings,
    syntax_only: bool,
) -> Option<DeclarationTable> {
    if syntax_only || !settings.semantic {
        tracing::debug!("semantic resolution disabled, shaping names from syntax");
        return None;
    }
    let table = DeclarationTable::from_files(parsed.iter().map(|f| (&f.tree, f.source.as_str())));
    tracing::info!(
        "indexed {} type declarations from {} files",
        table.len(),
        parsed.len()
    );
    Some(table)
}

fn thread_pool(settings: &Settings) -> GraphResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(settings.parallel_threads)
        .build()
        .context("Failed to start worker threads")
}

fn run_relations(
    files: &[PathBuf],
    settings: &Settings,
    format: OutputFormat,
    syntax_only: bool,
    with_definitions: bool,
) -> GraphResult<()> {
    let pool = thread_pool(settings)?;
    let parsed = pool.install(|| load_files(files, settings))?;
    let table = build_model(&parsed, settings, syntax_only);
    let model: Option<&dyn SemanticModel> = table.as_ref().map(|t| t as &dyn SemanticModel);

    let relationships: RelationshipCollection = pool.install(|| {
        parsed
            .par_iter()
            .map(|file| extract_file(&file.tree, &file.source, model, settings))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    });

    let definitions = if with_definitions {
        definition_lines(&parsed, model)
    } else {
        Vec::new()
    };

    if format.is_json() {
        print_json(RelationsOutput {
            definitions,
            relationships,
        })
    } else {
        print!("{}", render_diagram(&definitions, &relationships));
        Ok(())
    }
}

fn run_names(
    files: &[PathBuf],
    settings: &Settings,
    format: OutputFormat,
    syntax_only: bool,
) -> GraphResult<()> {
    let pool = thread_pool(settings)?;
    let parsed = pool.install(|| load_files(files, settings))?;
    let table = build_model(&parsed, settings, syntax_only);
    let model: Option<&dyn SemanticModel> = table.as_ref().map(|t| t as &dyn SemanticModel);

    let entries: Vec<NameEntry> = parsed
        .iter()
        .flat_map(|file| name_entries(file, model))
        .collect();

    if format.is_json() {
        print_json(entries)
    } else {
        for entry in &entries {
            println!("{}\t{}", entry.name, entry.definition);
        }
        Ok(())
    }
}

fn name_entries(file: &ParsedFile, model: Option<&dyn SemanticModel>) -> Vec<NameEntry> {
    type_declarations(file.tree.root_node())
        .iter()
        .map(|decl| NameEntry {
            file: file.path.clone(),
            name: TypeNameText::from_declaration(decl, &file.source, model),
            definition: type_definition_text(decl, &file.source, model),
        })
        .collect()
}

fn definition_lines(parsed: &[ParsedFile], model: Option<&dyn SemanticModel>) -> Vec<String> {
    parsed
        .iter()
        .flat_map(|file| {
            type_declarations(file.tree.root_node())
                .iter()
                .map(|decl| type_definition_text(decl, &file.source, model))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn print_json<T: Serialize>(data: T) -> GraphResult<()> {
    let response = JsonResponse::success(data);
    let json = serde_json::to_string_pretty(&response).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
