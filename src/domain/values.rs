use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every input the personal-information form exposes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    FamilyName,
    Gender,
    OtherGender,
    Birthdate,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::FamilyName,
        FormField::Gender,
        FormField::OtherGender,
        FormField::Birthdate,
    ];

    /// Key used in documents and error maps.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::FamilyName => "familyName",
            FormField::Gender => "gender",
            FormField::OtherGender => "otherGender",
            FormField::Birthdate => "birthdate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::FamilyName => "Family name",
            FormField::Gender => "Gender",
            FormField::OtherGender => "Other gender",
            FormField::Birthdate => "Birthdate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Options offered by the gender select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub const fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.as_str() == raw)
    }

    pub fn is_other(raw: &str) -> bool {
        raw == Gender::Other.as_str()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, possibly invalid, contents of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormValues {
    pub name: String,
    pub family_name: String,
    pub gender: String,
    pub other_gender: String,
    /// ISO date (`YYYY-MM-DD`).
    pub birthdate: String,
}

impl FormValues {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::FamilyName => &self.family_name,
            FormField::Gender => &self.gender,
            FormField::OtherGender => &self.other_gender,
            FormField::Birthdate => &self.birthdate,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::FamilyName => &mut self.family_name,
            FormField::Gender => &mut self.gender,
            FormField::OtherGender => &mut self.other_gender,
            FormField::Birthdate => &mut self.birthdate,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}

/// Error string per field; an empty string means the field is valid.
///
/// Backed by a fixed table so every field always has an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: [String; 5],
}

impl ErrorMap {
    pub fn get(&self, field: FormField) -> &str {
        &self.entries[field.index()]
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        self.entries[field.index()] = message.into();
    }

    pub fn clear(&mut self, field: FormField) {
        self.entries[field.index()].clear();
    }

    pub fn clear_all(&mut self) {
        for entry in &mut self.entries {
            entry.clear();
        }
    }

    pub fn is_clear(&self) -> bool {
        self.entries.iter().all(String::is_empty)
    }

    pub fn count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        FormField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// Snapshot of a submission that passed whole-form validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub family_name: String,
    pub gender: String,
    pub other_gender: String,
    pub birthdate: String,
}

impl From<FormValues> for PersonalInfo {
    fn from(values: FormValues) -> Self {
        let FormValues {
            name,
            family_name,
            gender,
            other_gender,
            birthdate,
        } = values;
        Self {
            name,
            family_name,
            gender,
            other_gender,
            birthdate,
        }
    }
}
