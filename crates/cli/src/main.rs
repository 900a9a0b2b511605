use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use fieldset_core::{parse_schema, validate, ErrorMap, FieldDefinition, ValueMap};
use fieldset_form::{display_group, render_group};
use fieldset_render::EditorSpec;

static DEFINITIONS_SCHEMA_STR: &str = include_str!("../../../docs/field-definitions-schema.json");

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Fieldset custom-field engine toolchain.
#[derive(Parser)]
#[command(name = "fieldset", version, about = "Schema-driven custom field toolchain")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a values document against a field schema
    Validate {
        /// Path to the schema document (JSON array of field definitions)
        schema: PathBuf,
        /// Path to the values JSON object
        #[arg(long)]
        values: PathBuf,
    },

    /// Render stored values as read-only display text
    Show {
        /// Path to the schema document
        schema: PathBuf,
        /// Path to the values JSON object
        #[arg(long)]
        values: PathBuf,
    },

    /// Describe the editor layout for a schema
    Editors {
        /// Path to the schema document
        schema: PathBuf,
        /// Path to the values JSON object (feeds multi-choice chip state)
        #[arg(long)]
        values: Option<PathBuf>,
        /// Column count for the layout (clamped to 1..=3)
        #[arg(long, default_value_t = 1)]
        columns: u8,
    },

    /// Check a schema document against the field-definitions JSON Schema
    Check {
        /// Path to the schema document
        schema: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { schema, values } => {
            cmd_validate(&schema, &values, cli.output, cli.quiet);
        }
        Commands::Show { schema, values } => {
            cmd_show(&schema, &values, cli.output, cli.quiet);
        }
        Commands::Editors {
            schema,
            values,
            columns,
        } => {
            cmd_editors(&schema, values.as_deref(), columns, cli.output, cli.quiet);
        }
        Commands::Check { schema } => {
            cmd_check(&schema, cli.output, cli.quiet);
        }
    }
}

fn cmd_validate(schema_path: &Path, values_path: &Path, output: OutputFormat, quiet: bool) {
    let definitions = load_schema(schema_path, output, quiet);
    let values = load_values(&definitions, values_path, output, quiet);

    let errors = validate(&definitions, &values);
    if errors.is_empty() {
        if !quiet {
            match output {
                OutputFormat::Text => println!("valid"),
                OutputFormat::Json => println!("{{\"valid\": true}}"),
            }
        }
        return;
    }

    match output {
        OutputFormat::Text => {
            if !quiet {
                eprintln!("invalid values ({} error(s))", errors.len());
                for (api_name, error) in errors.iter() {
                    eprintln!("  {}: {}", api_name, error);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid": false,
                "errors": errors.to_json(),
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
    process::exit(1);
}

fn cmd_show(schema_path: &Path, values_path: &Path, output: OutputFormat, quiet: bool) {
    let definitions = load_schema(schema_path, output, quiet);
    let values = load_values(&definitions, values_path, output, quiet);

    let items = display_group(&definitions, &values);
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => {
            for item in &items {
                println!("{}: {}", item.label, item.value.text());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&items).unwrap_or_default()
            );
        }
    }
}

fn cmd_editors(
    schema_path: &Path,
    values_path: Option<&Path>,
    columns: u8,
    output: OutputFormat,
    quiet: bool,
) {
    let definitions = load_schema(schema_path, output, quiet);
    let values = match values_path {
        Some(path) => load_values(&definitions, path, output, quiet),
        None => ValueMap::new(),
    };

    // An empty schema renders nothing, not an empty container.
    let Some(layout) = render_group(&definitions, &values, &ErrorMap::new(), columns) else {
        if !quiet && output == OutputFormat::Json {
            println!("null");
        }
        return;
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => {
            for item in &layout.items {
                println!("{} [{}]", item.api_name, editor_kind(&item.editor));
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&layout).unwrap_or_default()
            );
        }
    }
}

fn cmd_check(schema_path: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_json(schema_path, output, quiet);

    let schema: serde_json::Value = match serde_json::from_str(DEFINITIONS_SCHEMA_STR) {
        Ok(s) => s,
        Err(e) => {
            let msg = format!("internal error: failed to parse embedded schema: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("internal error: failed to compile embedded schema: {}", e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    let errors: Vec<String> = validator.iter_errors(&doc).map(|e| format!("{}", e)).collect();

    if errors.is_empty() {
        if !quiet {
            match output {
                OutputFormat::Text => println!("valid"),
                OutputFormat::Json => println!("{{\"valid\": true}}"),
            }
        }
        return;
    }

    match output {
        OutputFormat::Text => {
            if !quiet {
                eprintln!("invalid schema document");
                for err in &errors {
                    eprintln!("  - {}", err);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid": false,
                "errors": errors,
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
    process::exit(1);
}

/// The wire tag of an editor affordance, for compact text output.
fn editor_kind(editor: &EditorSpec) -> &'static str {
    match editor {
        EditorSpec::SingleLine { .. } => "single_line",
        EditorSpec::MultiLine { .. } => "multi_line",
        EditorSpec::Numeric { .. } => "numeric",
        EditorSpec::DatePicker => "date_picker",
        EditorSpec::DateTimePicker => "date_time_picker",
        EditorSpec::Toggle { .. } => "toggle",
        EditorSpec::SingleChoice { .. } => "single_choice",
        EditorSpec::MultiChoice { .. } => "multi_choice",
    }
}

// ── Input loading helpers ───────────────────────────────────────────

fn read_json(path: &Path, output: OutputFormat, quiet: bool) -> serde_json::Value {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            let msg = format!("error: file not found: {}", path.display());
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error: invalid JSON in {}: {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

fn load_schema(path: &Path, output: OutputFormat, quiet: bool) -> Vec<FieldDefinition> {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => {
            let msg = format!("error: schema file not found: {}", path.display());
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };
    match parse_schema(&text) {
        Ok(defs) => defs,
        Err(e) => {
            let msg = format!("error in {}: {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

fn load_values(
    definitions: &[FieldDefinition],
    path: &Path,
    output: OutputFormat,
    quiet: bool,
) -> ValueMap {
    let raw = read_json(path, output, quiet);
    if !raw.is_object() {
        let msg = format!(
            "error: values document {} must be a JSON object",
            path.display()
        );
        report_error(&msg, output, quiet);
        process::exit(1);
    }
    ValueMap::from_json(definitions, &raw)
}

fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\""));
        }
    }
}
