use crate::domain::{FormField, FormValues, Gender};

/// Condition a field's value must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Requirement {
    /// Non-empty.
    Present,
    /// Non-empty once surrounding whitespace is removed.
    PresentTrimmed,
    /// Non-empty, but only while `field` holds `equals`.
    PresentWhen {
        field: FormField,
        equals: &'static str,
    },
}

impl Requirement {
    pub(crate) fn depends_on(&self) -> Option<FormField> {
        match self {
            Requirement::PresentWhen { field, .. } => Some(*field),
            Requirement::Present | Requirement::PresentTrimmed => None,
        }
    }

    pub(crate) fn applies(&self, values: &FormValues) -> bool {
        match self {
            Requirement::PresentWhen { field, equals } => values.get(*field) == *equals,
            Requirement::Present | Requirement::PresentTrimmed => true,
        }
    }

    pub(crate) fn is_satisfied(&self, value: &str, values: &FormValues) -> bool {
        if !self.applies(values) {
            return true;
        }
        match self {
            Requirement::PresentTrimmed => !value.trim().is_empty(),
            Requirement::Present | Requirement::PresentWhen { .. } => !value.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldRule {
    pub(crate) field: FormField,
    pub(crate) requirement: Requirement,
    pub(crate) message: &'static str,
}

pub(crate) const PERSONAL_INFO_RULES: &[FieldRule] = &[
    FieldRule {
        field: FormField::Name,
        requirement: Requirement::PresentTrimmed,
        message: "Please enter your name.",
    },
    FieldRule {
        field: FormField::FamilyName,
        requirement: Requirement::Present,
        message: "Please enter your family name.",
    },
    FieldRule {
        field: FormField::Gender,
        requirement: Requirement::Present,
        message: "Please select gender.",
    },
    FieldRule {
        field: FormField::OtherGender,
        requirement: Requirement::PresentWhen {
            field: FormField::Gender,
            equals: Gender::Other.as_str(),
        },
        message: "Please enter your gender.",
    },
    FieldRule {
        field: FormField::Birthdate,
        requirement: Requirement::Present,
        message: "Please select your birthdate.",
    },
];

