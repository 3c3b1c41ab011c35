//! CLI entry point for consoleguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `consoleguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use consoleguard_app::{
    ExplainOutput, ValidateInput, decode_error_result, exit_code, parse_result_json,
    render_annotations, render_markdown, render_text, run_explain, run_validate,
    serialize_result, write_result,
};
use consoleguard_settings::Overrides;
use consoleguard_types::ValidationResult;
use std::io::Read;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "CONSOLEGUARD_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "consoleguard",
    version,
    about = "Validate CloudFormation templates for AWS Console private access"
)]
struct Cli {
    /// Path to consoleguard config TOML (a missing file means defaults).
    #[arg(long, global = true, default_value = "consoleguard.toml")]
    config: Utf8PathBuf,

    /// Override the deployment region (default us-east-1).
    #[arg(long, global = true)]
    region: Option<String>,

    /// Log at debug level unless CONSOLEGUARD_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
    Markdown,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a template and print the result.
    Validate {
        /// Template path, or `-` to read from stdin.
        template: String,

        /// Output format for stdout.
        #[arg(long, value_enum, default_value = "json")]
        format: Format,

        /// Also write the JSON result to this path.
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Exit non-zero on `fail` (default) or also on `warning`.
        #[arg(long)]
        fail_on: Option<String>,
    },

    /// Render markdown from a saved JSON result.
    Md {
        /// Path to the JSON result file.
        #[arg(long)]
        result: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from a saved JSON result.
    Annotations {
        /// Path to the JSON result file.
        #[arg(long)]
        result: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule id with remediation guidance.
    Explain {
        /// The rule id (e.g., "endpoints.interface_required").
        rule_id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Validate {
            ref template,
            format,
            ref out,
            ref fail_on,
        } => cmd_validate(&cli, template, format, out.as_deref(), fail_on.clone()),
        Commands::Md { result, output } => cmd_md(&result, output.as_deref()),
        Commands::Annotations { result, max } => cmd_annotations(&result, max),
        Commands::Explain { rule_id } => cmd_explain(&rule_id),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn cmd_validate(
    cli: &Cli,
    template: &str,
    format: Format,
    out: Option<&Utf8Path>,
    fail_on: Option<String>,
) -> anyhow::Result<()> {
    let outcome = (|| -> anyhow::Result<i32> {
        let template_text = read_template(template)?;
        let config_text = read_config(&cli.config)?;

        let output = run_validate(ValidateInput {
            template_text: &template_text,
            config_text: &config_text,
            overrides: Overrides {
                region: cli.region.clone(),
                fail_on,
            },
        })?;

        if let Some(err) = &output.template_error {
            eprintln!("consoleguard: error parsing template: {err}");
        }

        print_result(&output.result, format)?;
        if let Some(path) = out {
            write_result(path, &output.result).context("write result json")?;
        }

        Ok(exit_code(&output))
    })();

    match outcome {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("consoleguard error: {err:#}");
            if matches!(format, Format::Json) {
                let result = decode_error_result(&format!("{err:#}"));
                let _ = print_result(&result, Format::Json);
            }
            std::process::exit(2);
        }
    }
}

fn read_template(template: &str) -> anyhow::Result<String> {
    if template == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read template from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(template).with_context(|| format!("read template: {}", template))
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(%path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn print_result(result: &ValidationResult, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            let bytes = serialize_result(result)?;
            print!("{}", String::from_utf8_lossy(&bytes));
        }
        Format::Text => print!("{}", render_text(result)),
        Format::Markdown => print!("{}", render_markdown(result)),
    }
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(result_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(result_path)
        .with_context(|| format!("read result: {}", result_path))?;
    let result = parse_result_json(&text)?;
    let md = render_markdown(&result);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(result_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(result_path)
        .with_context(|| format!("read result: {}", result_path))?;
    let result = parse_result_json(&text)?;

    for annotation in render_annotations(&result, max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(rule_id: &str) -> anyhow::Result<()> {
    match run_explain(rule_id) {
        ExplainOutput::Found(exp) => {
            print!("{}", consoleguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!(
                "{}",
                consoleguard_app::format_not_found(&identifier, available_rule_ids)
            );
            std::process::exit(1);
        }
    }
}
