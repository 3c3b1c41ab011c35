//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_result_schema() -> schemars::Schema {
    schema_for!(consoleguard_types::ValidationResult)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(consoleguard_settings::ConsoleguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "consoleguard.result.v1.json",
            generate: generate_result_schema,
        },
        SchemaSpec {
            filename: "consoleguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Validate fixture golden results.
///
/// For every `tests/fixtures/<name>/` with an `expected.result.json`:
/// 1. the golden file validates against the generated result schema
/// 2. running the engine on `template.json` (default region) reproduces it
fn conform() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_result_schema())
        .context("Failed to convert result schema to JSON")?;
    // schemars emits draft 2020-12; let jsonschema pick the draft from `$schema`.
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let dir = fixtures_dir();
    let mut entries: Vec<PathBuf> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.join("expected.result.json").exists())
        .collect();
    entries.sort();

    let mut errors = Vec::new();
    for fixture in &entries {
        let name = fixture
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let expected_text = fs::read_to_string(fixture.join("expected.result.json"))
            .with_context(|| format!("Failed to read {}/expected.result.json", name))?;
        let expected: serde_json::Value = serde_json::from_str(&expected_text)
            .with_context(|| format!("Failed to parse {}/expected.result.json", name))?;

        for err in compiled.iter_errors(&expected) {
            errors.push(format!("{}: schema validation: {}", name, err));
        }

        let template_text = fs::read_to_string(fixture.join("template.json"))
            .with_context(|| format!("Failed to read {}/template.json", name))?;
        match consoleguard_domain::TemplateModel::from_json_str(&template_text) {
            Ok(model) => {
                let ctx = consoleguard_domain::RegionContext::default();
                let actual = serde_json::to_value(consoleguard_domain::validate(&model, &ctx))
                    .context("Failed to serialize result")?;
                if actual != expected {
                    errors.push(format!("{}: engine output differs from golden file", name));
                }
            }
            Err(err) => errors.push(format!("{}: template does not decode: {}", name, err)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} fixtures conform", entries.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Validate that every rule id has a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_ids = consoleguard_types::explain::all_rule_ids();
    let mut errors = Vec::new();

    for rule_id in rule_ids {
        match consoleguard_types::explain::lookup_explanation(rule_id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Rule '{}' has empty title", rule_id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Rule '{}' has empty description", rule_id));
                }
                if exp.remediation.is_empty() {
                    errors.push(format!("Rule '{}' has empty remediation", rule_id));
                }
                for (label, snippet) in [
                    ("before", exp.examples.before),
                    ("after", exp.examples.after),
                ] {
                    // Examples are `"Key": value` fragments of a template.
                    let wrapped = format!("{{{snippet}}}");
                    if let Err(e) = serde_json::from_str::<serde_json::Value>(&wrapped) {
                        errors.push(format!(
                            "Rule '{}' {} example is not a JSON fragment: {}",
                            rule_id, label, e
                        ));
                    }
                }
            }
            None => errors.push(format!("Rule '{}' has no explanation", rule_id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule ids have explanations", rule_ids.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Check fixture golden results against the schema and engine");
    eprintln!("  explain-coverage  Validate all rule ids have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", consoleguard_types::SCHEMA_RESULT_V1);
            println!("{}", consoleguard_settings::CONFIG_SCHEMA_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
