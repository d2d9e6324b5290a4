use anyhow::{Context, Result};
use jsonschema::Validator;
use schemars::schema_for;
use serde_json::Value;

use crate::domain::FormValues;

/// JSON Schema describing documents accepted as form prefill.
pub fn form_values_schema() -> Result<Value> {
    serde_json::to_value(schema_for!(FormValues)).context("failed to serialize form schema")
}

/// Structural check for prefill documents, run before deserializing them.
pub struct DocumentValidator {
    validator: Validator,
}

impl DocumentValidator {
    pub fn new() -> Result<Self> {
        let schema = form_values_schema()?;
        let validator =
            jsonschema::validator_for(&schema).context("failed to compile form schema")?;
        Ok(Self { validator })
    }

    /// Returns one `pointer: message` line per violation.
    pub fn check(&self, document: &Value) -> Result<(), Vec<String>> {
        let issues: Vec<String> = self
            .validator
            .iter_errors(document)
            .map(|error| {
                let pointer = error.instance_path.to_string();
                let prefix = if pointer.is_empty() {
                    "<root>".to_string()
                } else {
                    pointer
                };
                format!("{prefix}: {error}")
            })
            .collect();
        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}
