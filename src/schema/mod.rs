//! Declarative rule table for the personal-information form.
//!
//! Every rule is a pure function of the whole [`FormValues`], so a single
//! field can be re-validated on its own (live validation) and the whole
//! object can be validated at once (submission gating) with identical
//! results.

mod document;
mod rules;

use std::fmt;

use crate::domain::{ErrorMap, FormField, FormValues};

use rules::{FieldRule, PERSONAL_INFO_RULES};

pub use document::{DocumentValidator, form_values_schema};

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Every failing field of a whole-form pass, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Full error map; fields that passed get an empty entry.
    pub fn to_error_map(&self) -> ErrorMap {
        let mut map = ErrorMap::default();
        for error in &self.errors {
            map.set(error.field, error.message.clone());
        }
        map
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[derive(Debug, Clone, Copy)]
pub struct ValidationSchema {
    rules: &'static [FieldRule],
}

impl Default for ValidationSchema {
    fn default() -> Self {
        Self::personal_info()
    }
}

impl ValidationSchema {
    pub fn personal_info() -> Self {
        Self {
            rules: PERSONAL_INFO_RULES,
        }
    }

    /// Validate one field against the current values. Only the first
    /// violated rule of that field is reported.
    pub fn validate_at(&self, field: FormField, values: &FormValues) -> Result<(), ValidationError> {
        let value = values.get(field);
        match self
            .rules_for(field)
            .find(|rule| !rule.requirement.is_satisfied(value, values))
        {
            Some(rule) => Err(ValidationError {
                field,
                message: rule.message.to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let errors: Vec<_> = FormField::ALL
            .into_iter()
            .filter_map(|field| self.validate_at(field, values).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    /// Whether `field` currently has an applicable requirement.
    pub fn is_required(&self, field: FormField, values: &FormValues) -> bool {
        self.rules_for(field)
            .any(|rule| rule.requirement.applies(values))
    }

    /// Fields whose rules read `field`.
    pub fn dependents_of(&self, field: FormField) -> impl Iterator<Item = FormField> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.requirement.depends_on() == Some(field))
            .map(|rule| rule.field)
    }

    fn rules_for(&self, field: FormField) -> impl Iterator<Item = &FieldRule> + '_ {
        self.rules.iter().filter(move |rule| rule.field == field)
    }
}
