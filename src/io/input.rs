use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::warn;

use crate::{domain::FormValues, schema::DocumentValidator};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Turn a prefill document into form values. Every structural problem is
/// reported at once rather than stopping at the first.
pub fn values_from_document(document: &Value) -> Result<FormValues> {
    let validator = DocumentValidator::new()?;
    if let Err(issues) = validator.check(document) {
        warn!(issues = issues.len(), "rejected prefill document");
        bail!("invalid form document:\n  {}", issues.join("\n  "));
    }
    serde_json::from_value(document.clone()).context("failed to read form values")
}

pub fn values_from_str(contents: &str, format: DocumentFormat) -> Result<FormValues> {
    let document = parse_document_str(contents, format)?;
    values_from_document(&document)
}
