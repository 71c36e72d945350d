use anyhow::Context;
use clap::{Parser, Subcommand};
use pkg_constants::form::NAMESPACE_KEY;
use pkg_types::config::{FormctlConfigFile, load_config_file};
use pkg_types::entity::parse_entities;
use pkg_types::field::{FieldKind, FieldRule};
use pkg_types::settings::VmSettings;
use pkg_types::validation::{Validation, ValidationObject, ValidationType};
use pkg_validation::{FieldValidators, validate_vm_like_entity_name};
use serde::Serialize;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "formctl", about = "Validate VM form field values")]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, default_value = "/etc/kvforms/formctl.yaml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single value with one field validator
    Check {
        /// Validator to run (positive-number, dns1123, url, vmware-url, container, bmc-url, mac)
        kind: FieldKind,
        /// Value to validate; omit to validate a missing value
        value: Option<String>,
    },
    /// Check that a VM or template name is not already taken in a namespace
    Name {
        value: Option<String>,
        /// Target namespace (defaults to `namespace` from the config file)
        #[arg(long)]
        namespace: Option<String>,
        /// YAML or JSON file listing existing entities
        #[arg(long)]
        entities: String,
    },
    /// Validate a YAML form document against the rules in the config file
    Form {
        /// YAML file mapping form keys to `{ value: ... }`
        file: String,
    },
}

/// JSON line printed for one validated value.
#[derive(Debug, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<ValidationType>,
}

impl Report {
    fn from_validation(key: Option<String>, result: &Validation) -> Self {
        match result {
            Ok(()) => Self {
                key,
                valid: true,
                message: None,
                kind: None,
            },
            Err(ValidationObject { message, kind }) => Self {
                key,
                valid: false,
                message: Some(message.clone()),
                kind: Some(*kind),
            },
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// 0 when everything validated, 1 when a value is invalid, 2 when input could not be read.
fn exit_status(result: &anyhow::Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns `Ok(true)` when everything validated.
fn run(cli: Cli) -> anyhow::Result<bool> {
    // Load config file (returns defaults if file not found)
    let file_cfg: FormctlConfigFile = load_config_file(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config))?;
    info!("Config file: {}", cli.config);

    let validators = match file_cfg.bmc_protocols.clone() {
        Some(protocols) => FieldValidators::with_bmc_protocols(protocols),
        None => FieldValidators::default(),
    };

    match cli.command {
        Commands::Check { kind, value } => {
            info!("Validating {} value", kind);
            let result = validators.validate(kind, value.as_deref());
            print_report(&Report::from_validation(None, &result))?;
            Ok(result.is_ok())
        }
        Commands::Name {
            value,
            namespace,
            entities,
        } => {
            let content = std::fs::read_to_string(&entities)
                .with_context(|| format!("failed to read entities file {}", entities))?;
            let existing = parse_entities(&content)
                .with_context(|| format!("failed to parse entities file {}", entities))?;
            info!("Loaded {} existing entities", existing.len());

            // Merge: CLI args > config file
            let mut settings = VmSettings::new();
            if let Some(ns) = namespace.or(file_cfg.namespace) {
                settings.set_value(NAMESPACE_KEY, &ns);
            }
            let result = validate_vm_like_entity_name(value.as_deref(), &settings, &existing);
            print_report(&Report::from_validation(None, &result))?;
            Ok(result.is_ok())
        }
        Commands::Form { file } => {
            if file_cfg.rules.is_empty() {
                warn!("No rules configured in {}; nothing to validate", cli.config);
            }
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read form file {}", file))?;
            let settings: VmSettings = serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse form file {}", file))?;

            let reports = form_reports(&validators, &settings, &file_cfg.rules);
            for report in &reports {
                print_report(report)?;
            }
            Ok(reports.iter().all(|r| r.valid))
        }
    }
}

/// One report per rule, keyed by the rule's form key.
fn form_reports(
    validators: &FieldValidators,
    settings: &VmSettings,
    rules: &[FieldRule],
) -> Vec<Report> {
    validators
        .validate_form(settings, rules)
        .into_iter()
        .map(|(key, result)| Report::from_validation(Some(key), &result))
        .collect()
}

fn print_report(report: &Report) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}
