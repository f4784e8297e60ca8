use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Subcommand;
use contact_config::Config;
use contact_core_form_contracts::{ContactFormProcessError, ContactFormService};
use contact_models::form::FormData;
use serde::Serialize;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum FormCommand {
    /// Print the field configuration
    Fields,
    /// Sanitize and validate a form and print the validation result
    Validate {
        /// JSON file containing the form data, defaults to stdin
        input: Option<PathBuf>,
    },
    /// Sanitize a form and print the result
    Sanitize {
        /// JSON file containing the form data, defaults to stdin
        input: Option<PathBuf>,
    },
    /// Sanitize, validate and submit a form using the configured transport
    Submit {
        /// JSON file containing the form data, defaults to stdin
        input: Option<PathBuf>,
    },
}

impl FormCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<ExitCode> {
        let service = environment::contact_form(&config)?;

        let ok = match self {
            FormCommand::Fields => {
                print_json(&service.field_configuration())?;
                true
            }
            FormCommand::Validate { input } => {
                let result = service.validate(&service.sanitize(&read_form(input)?));
                print_json(&result)?;
                result.is_valid()
            }
            FormCommand::Sanitize { input } => {
                print_json(&service.sanitize(&read_form(input)?))?;
                true
            }
            FormCommand::Submit { input } => match service.process(read_form(input)?).await {
                Ok(result) => {
                    print_json(&result)?;
                    result.success
                }
                Err(ContactFormProcessError::Invalid(validation)) => {
                    print_json(&validation)?;
                    false
                }
            },
        };

        Ok(if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

fn read_form(input: Option<PathBuf>) -> anyhow::Result<FormData> {
    let content = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read form from {}", path.display()))?,
        None => {
            std::io::read_to_string(std::io::stdin()).context("Failed to read form from stdin")?
        }
    };

    serde_json::from_str(&content).context("Failed to parse form data")
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
