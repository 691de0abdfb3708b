use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use tracing::info;

use tfsync_merge::{merge_objects, MergeOutcome};
use tfsync_provider::key_from_strings;
use tfsync_types::{AttrType, ObjectType, Severity, Value};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?.with_cli(&cli);
    colored::control::set_override(config.color);
    match cli.command {
        Command::Merge(args) => cmd_merge(&args, &config),
        Command::Key(args) => cmd_key(&args, &config),
    }
}

fn cmd_merge(args: &MergeArgs, config: &CliConfig) -> anyhow::Result<()> {
    let outcome = merge_files(args)?;
    println!("{}", render_outcome(&outcome, config.format)?);

    let errors = outcome.diagnostics.errors().count();
    let warnings = outcome.diagnostics.warnings().count();
    if errors > 0 {
        bail!("merge failed with {errors} error(s)");
    }
    if config.deny_warnings && warnings > 0 {
        bail!("merge reported {warnings} warning(s)");
    }
    Ok(())
}

fn cmd_key(args: &KeyArgs, config: &CliConfig) -> anyhow::Result<()> {
    let key = key_from_strings(args.items.as_slice());
    match config.format {
        OutputFormat::Text => println!("{key}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "key": key })),
    }
    Ok(())
}

/// Load the three input documents and merge them.
pub fn merge_files(args: &MergeArgs) -> anyhow::Result<MergeOutcome> {
    let schema: ObjectType = serde_json::from_value(read_json(&args.schema)?)
        .with_context(|| format!("invalid schema in {}", args.schema.display()))?;
    let ty = AttrType::Object(schema.clone());
    let old = Value::from_json(&read_json(&args.old)?, &ty)
        .with_context(|| format!("old state in {} does not match the schema", args.old.display()))?;
    let new = Value::from_json(&read_json(&args.new)?, &ty)
        .with_context(|| format!("new state in {} does not match the schema", args.new.display()))?;

    let outcome = merge_objects(&old, &new, &schema);
    info!(diagnostics = outcome.diagnostics.len(), "merge complete");
    Ok(outcome)
}

fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Render the merged state followed by its diagnostics.
pub fn render_outcome(outcome: &MergeOutcome, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "value": outcome.value.to_json(),
                "diagnostics": outcome.diagnostics,
            });
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let mut out = serde_json::to_string_pretty(&outcome.value.to_json())?;
            for diag in &outcome.diagnostics {
                let label = match diag.severity {
                    Severity::Warning => "warning".yellow().bold(),
                    Severity::Error => "error".red().bold(),
                };
                out.push_str(&format!("\n{label}: {}\n  {}", diag.summary, diag.detail));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SCHEMA: &str = r#"["object", {
        "name": "string",
        "retention": ["object", {"size_mb": "number", "time_minutes": "number"}]
    }]"#;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn merge_args(dir: &Path, old: &str, new: &str) -> MergeArgs {
        MergeArgs {
            old: write(dir, "old.json", old),
            new: write(dir, "new.json", new),
            schema: write(dir, "schema.json", SCHEMA),
        }
    }

    #[test]
    fn merges_files() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(
            dir.path(),
            r#"{"name": "ns", "retention": {"size_mb": 64, "time_minutes": null}}"#,
            r#"{"name": "other", "retention": {"size_mb": 1, "time_minutes": 30}}"#,
        );

        let outcome = merge_files(&args).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(
            outcome.value.to_json(),
            serde_json::json!({"name": "ns", "retention": {"size_mb": 64, "time_minutes": 30}})
        );
    }

    #[test]
    fn rejects_state_not_matching_schema() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(dir.path(), r#"{"name": 1}"#, r#"{"name": "ns"}"#);
        let err = merge_files(&args).unwrap_err();
        assert!(err.to_string().contains("old state"));
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = merge_args(dir.path(), "{}", "{}");
        args.new = dir.path().join("absent.json");
        let err = merge_files(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn renders_json_with_diagnostics() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(dir.path(), r#"{"name": "ns"}"#, r#"{"name": "ns"}"#);
        let outcome = merge_files(&args).unwrap();

        let rendered = render_outcome(&outcome, OutputFormat::Json).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(doc["value"], serde_json::json!({"name": "ns"}));
        assert_eq!(doc["diagnostics"], serde_json::json!([]));
    }

    #[test]
    fn renders_text_with_warning() {
        colored::control::set_override(false);
        let schema = ObjectType::from_pairs([("name", AttrType::String)]);
        let value = Value::from_json(&serde_json::json!({"name": "ns"}), &AttrType::Object(schema))
            .unwrap();
        let outcome = merge_objects(&value, &value, &ObjectType::default());

        let rendered = render_outcome(&outcome, OutputFormat::Text).unwrap();
        assert!(rendered.starts_with("{\n  \"name\": \"ns\"\n}"));
        assert!(rendered.contains("warning: Failed to merge state objects"));
    }
}
